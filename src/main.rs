use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod config;
mod error;
mod fetcher;
mod render;
mod session;
mod types;

use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::AppError;
use crate::session::SearchSession;

#[derive(Parser)]
#[command(name = "ghprofile")]
#[command(about = "Look up a GitHub user and browse their repositories", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API root to query instead of the configured one
    #[arg(long, global = true, env = "GHPROFILE_API_BASE", value_hint = ValueHint::Url)]
    api_base: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one user's profile and repositories
    #[command(short_flag = 'u', visible_alias = "lookup")]
    User {
        /// GitHub handle (e.g., octocat)
        handle: String,
        /// List every fetched repository instead of the first few
        #[arg(long, short = 'a')]
        all: bool,
    },
    /// Search handles one after another (default)
    #[command(short_flag = 'i')]
    Interactive,
    /// Show the config file location and the values in effect
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn apply_overrides(api_base: Option<&str>, timeout: Option<u64>, config: &mut Config) {
    if let Some(api_base) = api_base {
        config.api_base = api_base.to_string();
    }
    if let Some(timeout) = timeout {
        config.timeout_secs = Some(timeout);
    }
}

fn run(cli: Cli) -> Result<bool, AppError> {
    let api_base = cli.api_base.as_deref();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            commands::generate_completions(shell);
            return Ok(true);
        }
        Some(Commands::Config { init }) => {
            let path = Config::config_path()?;
            return commands::config_command(
                &path,
                init,
                |config| apply_overrides(api_base, cli.timeout, config),
                &mut io::stdout(),
            );
        }
        _ => {}
    }

    let mut config = Config::load()?;
    apply_overrides(api_base, cli.timeout, &mut config);
    tracing::debug!(?config, "configuration loaded");

    let client = GitHubClient::new(&config)?;
    let mut session = SearchSession::new(config.display_limit, config.fetch_options());

    match cli.command {
        Some(Commands::User { handle, all }) => Ok(commands::lookup_user(
            &client,
            &mut session,
            &handle,
            all,
            &mut io::stdout(),
        )?),
        _ => {
            commands::run_session(&client, &mut session, io::stdin().lock(), &mut io::stdout())?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
