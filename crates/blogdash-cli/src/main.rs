//! BlogDash command line client
//!
//! Signs in against the blog API, keeps the session in a JSON file and
//! prints the dashboard, post list and single posts.

use blogdash_cli::{LinePrompt, ListOptions, commands};
use blogdash_client::{ApiClient, ConfirmPrompt, FileStorage, SessionStore};
use blogdash_core::{Config, Result, init_logging};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Command line interface for the BlogDash dashboard
#[derive(Parser)]
#[command(
    name = "blogdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage blog posts from the terminal"
)]
struct Cli {
    /// Configuration file path (defaults to ./blogdash.{toml,yaml,json})
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "BLOGDASH_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Continue as guest without contacting the API
    Guest,

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Show metric cards and recent posts
    Summary,

    /// List posts
    Posts {
        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Only posts whose title, content or topic contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts with this status
        #[arg(long, value_parser = ["all", "generated", "published", "draft", "scheduled"])]
        status: Option<String>,
    },

    /// Show a single post
    Show {
        /// Post identifier
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete a post
    Delete {
        /// Post identifier
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let mut config = Config::load_file(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.format = "json".to_string();
    }
    init_logging(&config.logging)?;
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "blogdash starting"
    );

    let mut session = SessionStore::load(FileStorage::from_config(&config));
    let mut api = ApiClient::from_config(&config)?;
    if let Some(token) = session.token() {
        api = api.with_token(token);
    }

    match cli.command {
        Commands::Login { email, password } => {
            commands::login(&api, &mut session, &email, &password).await
        }
        Commands::Guest => commands::guest(&mut session),
        Commands::Logout => commands::logout(&mut session),
        Commands::Whoami => Ok(commands::whoami(&session)),
        Commands::Config => commands::show_config(&config),
        Commands::Summary => {
            commands::require_session(&session)?;
            Ok(commands::summary(&api).await)
        }
        Commands::Posts {
            page,
            search,
            status,
        } => {
            commands::require_session(&session)?;
            let options = ListOptions {
                page,
                search,
                status,
                ..ListOptions::from_config(&config)
            };
            commands::list(&api, &options).await
        }
        Commands::Show { id } => {
            commands::require_session(&session)?;
            commands::show(&api, &id).await
        }
        Commands::Delete { id, yes } => {
            commands::require_session(&session)?;
            let prompt: Box<dyn ConfirmPrompt> = if yes {
                Box::new(|_: &str| true)
            } else {
                Box::new(LinePrompt::stdio())
            };
            commands::delete(&api, prompt.as_ref(), config.posts.page_size, &id).await
        }
    }
}
