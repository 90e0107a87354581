use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resolve_version::config;
use resolve_version::git::Git2Repository;
use resolve_version::resolver::Resolver;
use resolve_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "resolve-version",
    version,
    about = "Resolve the next release tag from a literal version or a bump keyword"
)]
struct Args {
    #[arg(
        value_name = "VERSION_INPUT",
        help = "Version input (vMAJOR.MINOR.PATCH) or type (major, minor, patch)"
    )]
    version_input: String,

    #[arg(short = 'C', long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Remote to fetch tags from (overrides config)")]
    remote: Option<String>,

    #[arg(long, help = "Use local tags only, without fetching from the remote")]
    no_fetch: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = std::env::var("RESOLVE_VERSION_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(tag) => ui::display_version(&tag),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let config = config::load_config(args.config.as_deref())?;
    let options = config.resolve_options(args.remote.as_deref(), args.no_fetch);

    let repo = Git2Repository::open(&args.repo)?;
    let resolution = Resolver::new(&repo, options).resolve(&args.version_input)?;

    for warning in &resolution.warnings {
        ui::display_boundary_warning(warning);
    }

    Ok(resolution.tag)
}
