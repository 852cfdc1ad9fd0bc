use clap::Parser;
use miette::{IntoDiagnostic, Result};
use mmpay::application::gateway::{MobileMoneyGateway, PaymentGateway};
use mmpay::domain::order::Order;
use mmpay::domain::ports::{OrderStoreBox, SettingsStoreBox};
use mmpay::infrastructure::in_memory::{InMemoryCart, InMemoryOrderStore, InMemorySettingsStore};
#[cfg(feature = "storage-rocksdb")]
use mmpay::infrastructure::rocksdb::RocksDBStore;
use mmpay::interfaces::csv::order_writer::OrderWriter;
use mmpay::interfaces::csv::submission_reader::SubmissionReader;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout submissions CSV file
    input: PathBuf,

    /// Gateway settings JSON file (key/value options). Schema defaults apply
    /// for any option the file omits.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Path to persistent order database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings_store: SettingsStoreBox = match &cli.settings {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let options: HashMap<String, String> =
                serde_json::from_reader(file).into_diagnostic()?;
            Box::new(InMemorySettingsStore::with_options(options))
        }
        None => Box::new(InMemorySettingsStore::new()),
    };

    // Two boxed handles over the same store: one owned by the gateway, one
    // kept here to seed pending orders, like the host framework would.
    let (order_store, seed_store) = order_stores(&cli)?;

    let gateway = MobileMoneyGateway::new(settings_store, order_store, Box::new(InMemoryCart::new()))
        .await
        .into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = SubmissionReader::new(file);
    for record in reader.submissions() {
        match record {
            Ok(record) => {
                let (order_id, submission) = record.into_submission();
                if seed_store.get(order_id).await.into_diagnostic()?.is_none() {
                    seed_store
                        .store(Order::new(order_id))
                        .await
                        .into_diagnostic()?;
                }
                if let Err(e) = gateway.process_payment(order_id, &submission).await {
                    tracing::warn!(order_id, "Error processing submission: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("Error reading submission: {e}");
            }
        }
    }

    // Collect final state from the gateway
    let mut orders = gateway.into_orders().await.into_diagnostic()?;
    orders.sort_by_key(|order| order.id);

    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&orders).into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn order_stores(cli: &Cli) -> Result<(OrderStoreBox, OrderStoreBox)> {
    if let Some(db_path) = &cli.db_path {
        let store = RocksDBStore::open(db_path).into_diagnostic()?;
        return Ok((Box::new(store.clone()), Box::new(store)));
    }
    Ok(in_memory_order_stores())
}

#[cfg(not(feature = "storage-rocksdb"))]
fn order_stores(_cli: &Cli) -> Result<(OrderStoreBox, OrderStoreBox)> {
    Ok(in_memory_order_stores())
}

fn in_memory_order_stores() -> (OrderStoreBox, OrderStoreBox) {
    let store = InMemoryOrderStore::new();
    (Box::new(store.clone()), Box::new(store))
}
