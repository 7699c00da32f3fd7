//! texshell - an interactive shell for TeX projects
//!
//! Parses the command line, sets up logging, loads settings and hands
//! stdin/stdout to the shell loop.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use tracing::{debug, error, info};

use texshell::{SettingsLoader, ShellSettings};

/// Application arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Settings file path
    config_path: Option<PathBuf>,
    /// Root directory override
    root: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Suppress the welcome banner
    quiet: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(path) => app_args.config_path = Some(PathBuf::from(path)),
                    None => bail!("Missing settings file path"),
                },
                "--root" | "-r" => match args.next() {
                    Some(path) => app_args.root = Some(PathBuf::from(path)),
                    None => bail!("Missing root directory"),
                },
                "--debug" | "-d" => app_args.debug = true,
                "--quiet" | "-q" => app_args.quiet = true,
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("texshell v{}", texshell::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => bail!("Unknown option: {}", other),
                other => bail!("Unexpected argument: {}", other),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("texshell - {}", texshell::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    texshell [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    Load settings from FILE");
    println!("    -r, --root <DIR>       Anchor the session at DIR instead of $HOME");
    println!("    -d, --debug            Enable debug logging");
    println!("    -q, --quiet            Do not print the welcome banner");
    println!("    -?, --help             Print this help");
    println!("    -v, --version          Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    TEXSHELL_DEBUG         Enable debug mode (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("texshell: {}", e);
        print_help();
        process::exit(2);
    });

    init_logging(&args);

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("texshell: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging based on the debug flag; logs go to stderr
fn init_logging(args: &AppArgs) {
    let debug_env = env::var("TEXSHELL_DEBUG")
        .map_or(false, |v| v == "1" || v.to_lowercase() == "true");
    let log_level = if args.debug || debug_env { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn run(args: AppArgs) -> anyhow::Result<()> {
    info!("Starting texshell v{}", texshell::VERSION);

    let mut settings = load_settings(&args)?;
    if args.quiet {
        settings.show_intro = false;
    }

    let mut shell = texshell::init(&settings, args.root.clone())
        .context("failed to start the shell")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;

    info!("texshell shutdown complete");
    Ok(())
}

/// Load settings from `--config`, `TEXSHELL_CONFIG` or the default locations
fn load_settings(args: &AppArgs) -> anyhow::Result<ShellSettings> {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("TEXSHELL_CONFIG").ok().map(PathBuf::from));

    let settings = match &config_path {
        Some(path) => {
            debug!("Loading settings from: {}", path.display());
            SettingsLoader::load_from_path(path)
                .with_context(|| format!("cannot use settings file {}", path.display()))?
        }
        None => SettingsLoader::load()?,
    };

    Ok(settings)
}
