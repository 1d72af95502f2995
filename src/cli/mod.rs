//! Command-line interface.

mod preview;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tailform", about = "Tailwind-styled HTML form components")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the component preview gallery
    Preview {
        /// Port to listen on
        #[arg(long, default_value_t = 4000)]
        port: u16,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Preview { port } => preview::serve(port).await,
    }
}
