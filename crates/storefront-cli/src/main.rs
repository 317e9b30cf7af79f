use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;

use storefront_auth::{issue_token_at, verify_token};
use storefront_cli::seeder;
use storefront_config::{DatabaseConfig, JwtConfig};
use storefront_db::{PgProductRepository, init_db_pool};

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront CLI - Administrative tools for the Storefront API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a bearer token signed with JWT_SECRET
    IssueToken {
        /// Identity recorded in the token (prompted if not provided)
        #[arg(short = 'i', long)]
        identity: Option<String>,

        /// Lifetime in seconds (default: JWT_TOKEN_EXPIRY)
        #[arg(short = 't', long)]
        ttl: Option<i64>,
    },
    /// Check a token against JWT_SECRET
    VerifyToken {
        token: String,
    },
    /// Seed the database with fake products
    Seed {
        /// Number of products to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env();

    match cli.command {
        Commands::IssueToken { identity, ttl } => handle_issue_token(&jwt_config, identity, ttl),
        Commands::VerifyToken { token } => handle_verify_token(&jwt_config, &token),
        Commands::Seed { count } => handle_seed(count).await,
    }
}

fn handle_issue_token(jwt_config: &JwtConfig, identity: Option<String>, ttl: Option<i64>) {
    let identity = identity.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Identity")
            .default("ecommerce".to_string())
            .interact_text()
            .unwrap_or_else(|e| {
                eprintln!("❌ Failed to read identity: {}", e);
                std::process::exit(1);
            })
    });

    let ttl = Duration::seconds(ttl.unwrap_or(jwt_config.token_expiry));

    match issue_token_at(&identity, &jwt_config.secret, ttl, Utc::now()) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_verify_token(jwt_config: &JwtConfig, token: &str) {
    match verify_token(Some(token), &jwt_config.secret, Utc::now()) {
        Ok(claim) => {
            println!("✅ Token is valid");
            println!("   Identity: {}", claim.identity);
            println!("   Expires: {}", claim.expires_at.to_rfc3339());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(count: usize) {
    let db_config = DatabaseConfig::from_env();

    let pool = match init_db_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let repo = PgProductRepository::new(pool.clone());
    let result = seeder::seed_products(&repo, count).await;
    pool.close().await;

    match result {
        Ok(products) => println!("✅ Created {} products", products.len()),
        Err(e) => {
            eprintln!("\n❌ Error seeding products: {}", e);
            std::process::exit(1);
        }
    }
}
