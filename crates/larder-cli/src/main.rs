use clap::Parser;

mod bootstrap;
mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("larder error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = larder_config::LarderConfig::load_with_dotenv()?;

    match &cli.command {
        cli::Commands::Lists => commands::lists::handle(&config).await,
        cli::Commands::Watch => commands::watch::handle(&config).await,
        cli::Commands::Add(args) => commands::add::handle(args, &config).await,
        cli::Commands::Done(args) => commands::status::handle(args, true, &config).await,
        cli::Commands::Reopen(args) => commands::status::handle(args, false, &config).await,
        cli::Commands::Rm(args) => commands::rm::handle(args, &config).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LARDER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
