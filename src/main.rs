use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_store::BookingStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Booking state lives for the process lifetime only
    let store = BookingStore::new();

    // Start API server
    slotbook_api::start_server(config, store).await?;

    Ok(())
}
