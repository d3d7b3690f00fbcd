use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracker_serve::ServeConfig;

#[derive(Parser)]
#[command(name = "tracker", about = "Collects analytics events from embedded pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            init_tracing();
            if let Err(err) = tracker_serve::serve(ServeConfig::default()).await {
                tracing::error!(error = %err, "serve error");
                return ExitCode::FAILURE;
            }
        }
        Command::Openapi => {
            println!("{}", tracker_serve::openapi::generate_spec());
        }
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
