use clap::Parser;
use swap_route::cli::{commands, Cli, Commands};
use swap_route::core::{Config, SwapError};

#[tokio::main]
async fn main() -> Result<(), SwapError> {
    // Logs go to stderr; stdout carries only the command's value
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse CLI arguments first so --help works with a broken environment
    let cli = Cli::parse();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Quote(args) => commands::quote::execute(args, &config).await?,
        Commands::Calldata(args) => commands::calldata::execute(args, &config).await?,
        Commands::DstAmount(args) => commands::dst_amount::execute(args, &config).await?,
        Commands::Batch(args) => commands::batch::execute(args, &config).await?,
    }

    Ok(())
}
