use fruits_app::config;
use fruits_app::{FruitStore, PostgresFruitStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           MONGODB_URI (or DATABASE_URL)\n\
         Creates the fruits collection if it is missing.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error message if missing)
    let (uri_var, uri) = config::database_uri()?;
    println!("> Preflight:");
    println!("  {} is set ({} chars)", uri_var, uri.len());
    println!("  Listen address: {}", config::LISTEN_ADDR);

    // Connecting also creates the collection.
    let store = PostgresFruitStore::connect()
        .await
        .map_err(|e| anyhow::anyhow!("Could not connect to the store: {}", e))?;
    println!("  Store reachable, fruits collection present.");

    store.ping().await?;
    let fruits = store.list_all().await?;
    println!("  Stored fruits: {}", fruits.len());

    store.close().await;
    println!("> Preflight OK.");
    Ok(())
}
