use crate::commands::{
    run_import, run_list_neighborhoods, run_resolve, ImportArgs, ResolveArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mylocalguide::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MyLocalGuide",
    about = "Resolve San Francisco neighborhoods and ingest venue listings",
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
    /// Resolve a single venue address to a neighborhood
    Resolve(ResolveArgs),
    /// Ingest a CSV export of venue listings and print the run report
    Import(ImportArgs),
    /// List the neighborhoods the resolver can return
    Neighborhoods,
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
        Command::Resolve(args) => run_resolve(args),
        Command::Import(args) => run_import(args),
        Command::Neighborhoods => run_list_neighborhoods(),
    }
}
