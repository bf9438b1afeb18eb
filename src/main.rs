use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use seqforge::config::{Config, SearchParams};
use seqforge::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with search parameters; explicit flags still win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Validate(cmd::validate::ValidateArgs),
    Distance(cmd::distance::DistanceArgs),
}

fn resolve_params(
    path: &Option<String>,
    cli_config: &Config,
    sub_matches: &clap::ArgMatches,
) -> SearchParams {
    let Some(path) = path else {
        return cli_config.search.clone();
    };

    info!("⚙️  Loading parameters from: {}", path);
    let mut params = SearchParams::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });
    params.merge_from_cli(&cli_config.search, sub_matches);
    params
}

fn build_scorer(params: &SearchParams) -> Arc<Scorer> {
    match Scorer::new(params) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing SeqForge...");

    match cli.command {
        Commands::Search(mut args) => {
            let sub = matches.subcommand_matches("search").unwrap_or(&matches);
            args.config.search = resolve_params(&cli.config, &args.config, sub);
            let scorer = build_scorer(&args.config.search);
            cmd::search::run(args, scorer);
        }
        Commands::Validate(mut args) => {
            let sub = matches.subcommand_matches("validate").unwrap_or(&matches);
            args.config.search = resolve_params(&cli.config, &args.config, sub);
            let scorer = build_scorer(&args.config.search);
            if let Err(e) = cmd::validate::run(args, scorer) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        Commands::Distance(args) => cmd::distance::run(args),
    }
}
