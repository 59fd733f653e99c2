use anyhow::Result;
use signcrypt_relay::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
