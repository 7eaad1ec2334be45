use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "geo-cli",
    about = "Search NCBI GEO (Gene Expression Omnibus) datasets by keyword",
    long_about = "A CLI tool for finding GEO dataset records and printing their summary metadata"
)]
struct Cli {
    #[command(flatten)]
    search: commands::search::Search,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "geo-cli")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter))
        .init();

    cli.search
        .execute_with_config(cli.email.as_deref(), &cli.tool)
        .await
}
