//! # Seed Data Generator
//!
//! Populates the catalog with sample products for development, writing
//! through the save procedure like the API does.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default) against $DATABASE_URL
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount starting at code 5000
//! cargo run -p catalog-db --bin seed -- --count 1000 --start 5000
//!
//! # Specify database URL
//! cargo run -p catalog-db --bin seed -- --url postgres://localhost/catalog
//! ```
//!
//! Codes are sequential from `--start`; descriptions combine a product line
//! with a variant, e.g. `Notebook Dell Inspiron 15"`.

use std::env;
use std::time::Instant;

use catalog_core::{validation::validate_description, MATCH_ALL_PATTERN};
use catalog_db::{Database, DbConfig, ProductStore};

/// Product lines for realistic sample data.
const LINES: &[&str] = &[
    "Notebook Dell Inspiron",
    "Notebook Lenovo IdeaPad",
    "Monitor LG UltraGear",
    "Monitor Samsung Odyssey",
    "Mouse Logitech",
    "Teclado Mecanico Redragon",
    "Headset HyperX Cloud",
    "Impressora HP LaserJet",
    "Roteador TP-Link Archer",
    "SSD Kingston NV2",
    "Memoria Corsair Vengeance",
    "Cadeira Gamer ThunderX3",
];

/// Variants appended to each product line.
const VARIANTS: &[&str] = &["Basico", "Plus", "Pro", "Max", "Slim", "Preto", "Branco"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut start_code: i32 = 1000;
    let mut url = env::var("DATABASE_URL").ok();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    count = value.parse().unwrap_or(count);
                    i += 1;
                }
            }
            "--start" | "-s" => {
                if let Some(value) = args.get(i + 1) {
                    start_code = value.parse().unwrap_or(start_code);
                    i += 1;
                }
            }
            "--url" | "-u" => {
                if let Some(value) = args.get(i + 1) {
                    url = Some(value.clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -s, --start <CODE> First product code (default: 1000)");
                println!("  -u, --url <URL>    Postgres URL (default: $DATABASE_URL)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let Some(url) = url else {
        eprintln!("No database URL: pass --url or set DATABASE_URL");
        std::process::exit(2);
    };

    println!("🌱 Catalog Seed Data Generator");
    println!("==============================");
    println!("Products:   {}", count);
    println!("First code: {}", start_code);
    println!();

    let db = Database::new(DbConfig::from_url(&url)?).await?;
    let products = db.products();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = products.fetch_by_description(MATCH_ALL_PATTERN).await?;
    if !existing.is_empty() {
        println!("⚠ Catalog already has {} products", existing.len());
        println!("  Existing codes in range are overwritten.");
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    let started = Instant::now();

    for (offset, description) in descriptions().take(count).enumerate() {
        let Ok(offset) = i32::try_from(offset) else {
            break;
        };
        let Some(code) = start_code.checked_add(offset) else {
            eprintln!("Code range exhausted after {} products", generated);
            break;
        };

        if let Err(e) = validate_description(&description) {
            eprintln!("Skipping {}: {}", description, e);
            continue;
        }

        if let Err(e) = products.save(code, &description).await {
            eprintln!("Failed to save {}: {}", code, e);
            continue;
        }

        generated += 1;

        if generated % 50 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = started.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("Verifying search procedure...");
    let results = products.fetch_by_description("notebook").await?;
    println!("  Search 'notebook': {} results", results.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Endless cycle of "<line> <variant>" descriptions, numbered after the
/// first full pass so they stay distinct.
fn descriptions() -> impl Iterator<Item = String> {
    (0usize..).map(|n| {
        let combos = LINES.len() * VARIANTS.len();
        let line = LINES[n % LINES.len()];
        let variant = VARIANTS[(n / LINES.len()) % VARIANTS.len()];
        let round = n / combos;
        if round == 0 {
            format!("{} {}", line, variant)
        } else {
            format!("{} {} #{}", line, variant, round + 1)
        }
    })
}
