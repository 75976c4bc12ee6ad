use crate::report::{run_geocode, run_stats, GeocodeArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use delivery_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Delivery Insights",
    about = "Geocoding and delivery statistics service for the delivery admin dashboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a free-text address against the built-in gazetteer
    Geocode(GeocodeArgs),
    /// Summarize a deliveries export the way the dashboard does
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Geocode(args) => run_geocode(args),
        Command::Stats(args) => run_stats(args),
    }
}
