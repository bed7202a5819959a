use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "config.json")]
    config: PathBuf,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every well against the control and print the report
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Print the calibrated well positions
    Grid(cmd::grid::GridArgs),
    /// List the registered aggregation and scoring methods
    Methods,
    /// Write a configuration file with default values
    Init(cmd::init::InitArgs),
    /// Render the score table of an exported report
    Show(cmd::show::ShowArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let result = match &cli.command {
        Commands::Evaluate(args) => {
            let sub_matches = matches.subcommand_matches("evaluate");
            cmd::resolve_config(&cli.config, &args.config, sub_matches)
                .and_then(|config| cmd::evaluate::run(args, &config, &cli.config))
        }
        Commands::Grid(args) => {
            let sub_matches = matches.subcommand_matches("grid");
            cmd::resolve_config(&cli.config, &args.config, sub_matches)
                .and_then(|config| cmd::grid::run(&config))
        }
        Commands::Methods => {
            cmd::methods::run();
            Ok(())
        }
        Commands::Init(args) => cmd::init::run(args, &cli.config),
        Commands::Show(args) => cmd::show::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
