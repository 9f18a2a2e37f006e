use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront::audit::AuditLogger;
use shopfront::backend::LocalBackend;
use shopfront::cli::{
    handle_audit_command, handle_catalog_command, handle_signin_command, handle_signup_command,
    handle_validate_command,
};
use shopfront::config::{ShopPaths, Settings};

#[derive(Parser)]
#[command(
    name = "shopfront",
    version,
    about = "Storefront sign-up, validation and catalog administration",
    long_about = "Shopfront walks new customers through a step-by-step sign-up form, \
                  signs existing customers in, and lets administrators build the \
                  category / sub-category / item catalog from the command line."
)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account through the step-by-step sign-up form
    Signup(shopfront::cli::SignupArgs),

    /// Sign in to an existing account
    Signin(shopfront::cli::SigninArgs),

    /// Catalog management commands
    #[command(subcommand)]
    Catalog(shopfront::cli::CatalogCommands),

    /// Run a field validator
    #[command(subcommand)]
    Validate(shopfront::cli::ValidateCommands),

    /// Show recent audit log entries
    Audit(shopfront::cli::AuditArgs),

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new(default)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Paths, settings and audit logger shared by the stateful commands
struct Context {
    paths: ShopPaths,
    settings: Settings,
    audit: Option<AuditLogger>,
}

impl Context {
    fn load() -> Result<Self> {
        let paths = ShopPaths::new()?;
        let settings = Settings::load_or_create(&paths)?;
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            paths,
            settings,
            audit,
        })
    }

    fn backend(&self) -> Result<LocalBackend> {
        Ok(LocalBackend::open(self.paths.clone(), &self.settings.backend)?)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Validate(cmd)) => {
            // Validators need neither settings nor storage
            let valid = handle_validate_command(cmd)?;
            return Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Some(Commands::Signup(args)) => {
            let ctx = Context::load()?;
            handle_signup_command(&ctx.backend()?, &ctx.settings, ctx.audit.as_ref(), args)?;
        }
        Some(Commands::Signin(args)) => {
            let ctx = Context::load()?;
            handle_signin_command(&ctx.backend()?, ctx.audit.as_ref(), args)?;
        }
        Some(Commands::Catalog(cmd)) => {
            let ctx = Context::load()?;
            handle_catalog_command(&ctx.backend()?, ctx.audit.as_ref(), cmd)?;
        }
        Some(Commands::Audit(args)) => {
            let ctx = Context::load()?;
            let logger = AuditLogger::new(ctx.paths.audit_log());
            handle_audit_command(&logger, args)?;
        }
        Some(Commands::Config) => {
            let Context {
                paths, settings, ..
            } = Context::load()?;
            println!("Shopfront Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Backend:");
            println!("  Project ID:    {}", settings.backend.project_id);
            println!("  API key:       {}", settings.backend.masked_api_key());
            println!(
                "  Auth domain:   {}",
                settings.backend.auth_domain.as_deref().unwrap_or("(none)")
            );
            println!();
            println!("Settings:");
            println!("  Strict date of birth: {}", settings.strict_date_of_birth);
            println!("  Country code:         {}", settings.country_code);
            println!("  Audit enabled:        {}", settings.audit_enabled);
        }
        None => {
            println!("Shopfront - storefront sign-up and catalog administration");
            println!();
            println!("Run 'shopfront --help' for usage information.");
            println!("Run 'shopfront signup' to create an account.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
