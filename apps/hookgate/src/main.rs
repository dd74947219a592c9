//! HookGate - command-line driver for the webhook authorizer.
//!
//! Runs the same decision engine API Gateway invokes, against an authorizer
//! event read from a file or stdin. Useful for replaying captured events and
//! for producing test signatures.
//!
//! # Usage
//!
//! ```text
//! hookgate authorize [EVENT_FILE]      # exit 0 + policy JSON, or exit 1 + "Unauthorized"
//! hookgate sign SECRET [BODY_FILE]     # print the X-Hub-Signature value for a body
//! hookgate resolve METHOD_ARN          # print the resource a grant would cover
//! ```
//!
//! Omitting the file, or passing `-`, reads stdin.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOOKGATE_COMPARISON` | `constant-time` | `constant-time` or `legacy` |
//! | `HOOKGATE_DUAL_HEADER_POLICY` | `reject` | `reject` or `prefer-signature` |
//! | `HOOKGATE_PRINCIPAL_ID` | `me` | Principal reported in the grant |
//! | `HOOKGATE_REJECT_EMPTY_SECRET` | `false` | Deny GitHub requests when `GithubSecret` is empty |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `LOG_FORMAT` | `text` | `text` or `json` |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hookgate_auth::sign_github_payload;
use hookgate_core::{AuthorizerConfig, DecisionEngine, resolve_resource};
use hookgate_model::AuthorizationRequest;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code for a denied request.
const EXIT_UNAUTHORIZED: u8 = 1;

/// Exit code for usage, input and configuration errors.
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "hookgate", version)]
#[command(about = "Run the HookGate webhook authorizer against API Gateway events")]
#[command(after_help = "Omitting a file, or passing `-`, reads stdin.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Authorize a REQUEST authorizer event and print the policy
    Authorize {
        /// Event JSON file
        event_file: Option<PathBuf>,
    },
    /// Print the X-Hub-Signature value for a body
    Sign {
        /// GitHub webhook secret
        secret: String,
        /// Raw body file
        body_file: Option<PathBuf>,
    },
    /// Print the resource a grant would cover
    Resolve {
        /// Invoked method ARN
        method_arn: String,
    },
}

/// Initialize the tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Whether `LOG_FORMAT` asks for JSON output.
fn json_logs() -> bool {
    std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}

/// The file to read, or `None` for stdin (no path, or `-`).
fn input_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| *p != Path::new("-"))
}

/// Read a file, or stdin.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match input_path(path) {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn authorize(input: Option<&Path>) -> Result<ExitCode> {
    let config = AuthorizerConfig::from_env().context("invalid authorizer configuration")?;
    debug!(
        comparison = %config.comparison,
        dual_header_policy = %config.dual_header_policy,
        principal_id = %config.principal_id,
        reject_empty_secret = config.reject_empty_secret,
        "loaded authorizer configuration",
    );

    let event = read_input(input)?;
    let request =
        AuthorizationRequest::from_json(&event).context("failed to parse authorizer event")?;

    match DecisionEngine::new(config).decide(&request).into_response() {
        Ok(response) => {
            println!("{}", response.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Err(unauthorized) => {
            eprintln!("{unauthorized}");
            Ok(ExitCode::from(EXIT_UNAUTHORIZED))
        }
    }
}

fn sign(secret: &str, input: Option<&Path>) -> Result<ExitCode> {
    let body = read_input(input)?;
    println!("{}", sign_github_payload(secret, &body)?);
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_tracing(&log_level(), json_logs())?;

    match cli.command {
        Commands::Authorize { event_file } => authorize(event_file.as_deref()),
        Commands::Sign { secret, body_file } => sign(&secret, body_file.as_deref()),
        Commands::Resolve { method_arn } => {
            println!("{}", resolve_resource(&method_arn));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hookgate: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
