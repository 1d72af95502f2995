use clap::Parser;
use tailform::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tailform::cli::run(cli).await
}
