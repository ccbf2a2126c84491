mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use flyreg_admin::GrpcAdminClient;
use flyreg_config::{Config, DEFAULT_VERSION, RegistrationContext};
use flyreg_registrar::BatchRegistrar;
use output::{OutputFormat, print_results};

/// Flyreg - registers serialized tasks, workflows and launch plans with the admin service
#[derive(Parser)]
#[command(name = "flyreg")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the config file (default: ~/.flyreg/config.json)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Admin service endpoint, overrides the config file
  #[arg(long, global = true, env = "FLYREG_ADMIN_ENDPOINT")]
  admin_endpoint: Option<String>,

  /// Project to register into
  #[arg(short, long, global = true, env = "FLYREG_PROJECT")]
  project: Option<String>,

  /// Domain to register into
  #[arg(short, long, global = true, env = "FLYREG_DOMAIN")]
  domain: Option<String>,

  /// Output format for results
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
  output: OutputFormat,

  /// Log at debug level (RUST_LOG takes precedence)
  #[arg(long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Registers tasks/workflows/launchplans from list of generated serialized files
  Register {
    #[command(subcommand)]
    target: RegisterTarget,
  },
}

#[derive(Subcommand)]
enum RegisterTarget {
  /// Registers file resources
  #[command(visible_alias = "file")]
  Files {
    /// Serialized entity files, processed in sorted order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Version of the entities to be registered
    #[arg(short = 'v', long = "version", default_value = DEFAULT_VERSION)]
    entity_version: String,

    /// Record failures and continue instead of stopping at the first one
    #[arg(short, long)]
    skip_on_error: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match &cli.command {
    Some(Commands::Register { target }) => match target {
      RegisterTarget::Files {
        files,
        entity_version,
        skip_on_error,
      } => {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(register_files(
          &cli,
          files.clone(),
          entity_version.clone(),
          *skip_on_error,
        ))?;
      }
    },
    None => {
      println!("flyreg - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    )
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

async fn register_files(
  cli: &Cli,
  files: Vec<PathBuf>,
  version: String,
  skip_on_error: bool,
) -> Result<()> {
  let config = Config::load_or_default(cli.config.as_deref()).context("failed to load config")?;

  let mut admin = config.admin;
  if let Some(endpoint) = &cli.admin_endpoint {
    admin.endpoint = endpoint.clone();
  }

  let ctx = RegistrationContext::new(
    cli.project.clone().or(config.project).unwrap_or_default(),
    cli.domain.clone().or(config.domain).unwrap_or_default(),
  )
  .with_version(version)
  .with_skip_on_error(skip_on_error)
  .validate()?;

  let client = GrpcAdminClient::connect(&admin)
    .await
    .with_context(|| format!("failed to connect to admin service at {}", admin.endpoint))?;

  // Ctrl-C stops the batch before the next file starts.
  let cancel = CancellationToken::new();
  let interrupt = cancel.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      warn!("interrupt received, stopping after the current file");
      interrupt.cancel();
    }
  });

  let batch = BatchRegistrar::new(client, ctx);
  let results = batch
    .run(files, cancel)
    .await
    .context("registration aborted")?;

  print_results(&mut std::io::stdout().lock(), &results, cli.output)
}
