use crate::demo::{run_demo, run_quote_batch, run_quote_calculate, BatchArgs, DemoArgs, QuoteArgs};
use crate::error::AppError;
use crate::server;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Painting Quote Service",
    about = "Price painting jobs and serve quotes over HTTP",
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
    /// Price painting jobs from the command line
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Run a scripted walkthrough of measurement, quoting, and batch intake
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Price a single job described by flags
    Calculate(QuoteArgs),
    /// Price every request in a CSV export
    Batch(BatchArgs),
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
        Command::Quote {
            command: QuoteCommand::Calculate(args),
        } => run_quote_calculate(args),
        Command::Quote {
            command: QuoteCommand::Batch(args),
        } => run_quote_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
