use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use facetview::config::ViewConfig;
use facetview::FacetResult;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Collection statistics JSON as returned by the API.
    #[arg(global = true, short, long, default_value = "statistics.json")]
    stats: String,

    /// View config JSON; explicit flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Show(cmd::show::ShowArgs),
    Export(cmd::export::ExportArgs),
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Show(args) => (&args.config, matches.subcommand_matches("show")),
        Commands::Export(args) => (&args.config, matches.subcommand_matches("export")),
    };

    let config = match resolve_config(cli.config.as_deref(), cli_config, sub_matches) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    info!("📂 Loading statistics: {}", cli.stats);
    let ctx = match cmd::Context::load(&cli.stats, config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Show(args) => cmd::show::run(args, &ctx),
        Commands::Export(args) => cmd::export::run(args, &ctx),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &ViewConfig,
    matches: Option<&clap::ArgMatches>,
) -> FacetResult<ViewConfig> {
    let Some(path) = path else {
        cli_config.validate()?;
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading view config from: {}", path);
    let mut config = ViewConfig::load_from_file(path)?;
    if let Some(matches) = matches {
        config.merge_from_cli(cli_config, matches);
    }
    config.validate()?;
    Ok(config)
}
