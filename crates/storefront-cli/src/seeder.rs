//! Product seeding.
//!
//! Generates fake catalog rows and inserts them through a
//! [`ProductRepository`], so the same rules apply as for API writes.

use std::time::Instant;

use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use rand::Rng;
use rust_decimal::Decimal;

use storefront_db::{ProductRepository, RepositoryError};
use storefront_models::{CreateProductDto, Product};

const ADJECTIVES: [&str; 10] = [
    "Classic", "Deluxe", "Compact", "Organic", "Wireless", "Vintage", "Ergonomic", "Portable",
    "Premium", "Handmade",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates `count` products with valid names, prices and stock levels.
pub fn generate_products(count: usize) -> Vec<CreateProductDto> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
            let noun: String = Word().fake();
            let description = rng
                .gen_bool(0.8)
                .then(|| Sentence(4..12).fake::<String>());

            CreateProductDto {
                name: format!("{} {}", adjective, capitalize(&noun)),
                description,
                price: Decimal::new(rng.gen_range(99..250_000), 2),
                stock_quantity: rng.gen_range(0..=500),
            }
        })
        .collect()
}

/// Seeds `count` fake products and returns the stored rows.
pub async fn seed_products(
    repo: &dyn ProductRepository,
    count: usize,
) -> Result<Vec<Product>, RepositoryError> {
    let start_time = Instant::now();
    println!("📊 Seeding {} products...", count);

    let mut created = Vec::with_capacity(count);
    for dto in generate_products(count) {
        created.push(repo.insert(&dto).await?);
    }

    println!(
        "   ✓ Inserted {} products in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
