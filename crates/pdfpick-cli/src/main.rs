use clap::{Parser, Subcommand};
use pdfpick_cli::commands::{configure, picker};
use pdfpick_cli::config::default_config_path;

#[derive(Parser)]
#[command(name = "pdfpick", about = "Pick a HubSpot PDF and store its URL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the HubSpot access token and proxy URL
    Config {
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        proxy: Option<String>,
    },
    /// List loaded PDFs, optionally filtered
    List {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Store the URL of the PDF with this id
    Select { id: String },
    /// Clear the stored URL
    Clear,
    /// Drop the cache and reload every PDF
    Refresh,
    /// Show the currently stored PDF
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let path = default_config_path();
    match cli.command {
        Commands::Config { token, proxy } => {
            configure::run_configure(&path, token.as_deref(), proxy.as_deref())?;
        }
        Commands::List { query } => picker::run_list(&path, query.as_deref()).await?,
        Commands::Select { id } => picker::run_select(&path, &id).await?,
        Commands::Clear => picker::run_clear(&path)?,
        Commands::Refresh => picker::run_refresh(&path).await?,
        Commands::Show => picker::run_show(&path).await?,
    }
    Ok(())
}
