//! In-memory [`ProductRepository`] for tests and local runs without a
//! database.
//!
//! Ordering follows PostgreSQL defaults: `NULL` descriptions sort last when
//! ascending and first when descending, and ties are broken by `id`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_core::{PageRequest, SortColumn, SortOrder};
use storefront_models::{CreateProductDto, Product, UpdateProductDto};

use crate::repository::{ProductRepository, RepositoryError};

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Product>,
}

#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    table: RwLock<Table>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, AtomicOrdering::SeqCst);
    }

    /// Number of repository calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn begin(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.failing.load(AtomicOrdering::SeqCst) {
            return Err(RepositoryError::Storage("connection refused".to_string()));
        }
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&Table) -> T) -> Result<T, RepositoryError> {
        self.begin()?;
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(f(&table))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T, RepositoryError> {
        self.begin()?;
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(f(&mut table))
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("product table lock poisoned".to_string())
}

fn apply(product: &mut Product, dto: &CreateProductDto) {
    product.name = dto.name.clone();
    product.description = dto.description.clone();
    product.price = dto.price;
    product.stock_quantity = dto.stock_quantity;
}

fn nulls_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare(a: &Product, b: &Product, page: &PageRequest) -> Ordering {
    let primary = match page.sort_by {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Description => nulls_last(&a.description, &b.description),
        SortColumn::Price => a.price.cmp(&b.price),
        SortColumn::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
    };
    let primary = match page.sort_order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn insert(&self, dto: &CreateProductDto) -> Result<Product, RepositoryError> {
        self.write(|table| {
            table.last_id += 1;
            let product = Product {
                id: table.last_id,
                name: dto.name.clone(),
                description: dto.description.clone(),
                price: dto.price,
                stock_quantity: dto.stock_quantity,
            };
            table.rows.insert(product.id, product.clone());
            product
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.read(|table| table.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.read(|table| table.rows.values().cloned().collect())
    }

    async fn list_page(&self, page: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        self.read(|table| {
            let mut rows: Vec<Product> = table.rows.values().cloned().collect();
            rows.sort_by(|a, b| compare(a, b, page));

            let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
            let limit = usize::try_from(page.limit).unwrap_or(0);
            rows.into_iter().skip(offset).take(limit).collect()
        })
    }

    async fn update(
        &self,
        id: i32,
        dto: &UpdateProductDto,
    ) -> Result<Option<Product>, RepositoryError> {
        self.write(|table| {
            table.rows.get_mut(&id).map(|product| {
                apply(product, dto);
                product.clone()
            })
        })
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.write(|table| table.rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.read(|_| ())
    }
}
