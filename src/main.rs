use clap::Parser;
use irrigation_insights::cli::{run, Cli};
use irrigation_insights::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
