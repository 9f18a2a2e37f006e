//! Sign-in CLI command

use clap::Args;
use zeroize::Zeroizing;

use crate::audit::AuditLogger;
use crate::backend::Backend;
use crate::display::format_profile_details;
use crate::error::ShopResult;
use crate::services::AuthService;

use super::signup::prompt_password;

/// Arguments for `shopfront signin`
#[derive(Args)]
pub struct SigninArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password (prompted for when absent)
    #[arg(long, env = "SHOPFRONT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Handle `shopfront signin`
pub fn handle_signin_command<B: Backend + ?Sized>(
    backend: &B,
    audit: Option<&AuditLogger>,
    args: SigninArgs,
) -> ShopResult<()> {
    let password = match args.password {
        Some(password) => Zeroizing::new(password),
        None => prompt_password("Password: ")?,
    };

    let mut service = AuthService::new(backend);
    if let Some(logger) = audit {
        service = service.with_audit(logger);
    }

    let session = service.sign_in(&args.email, &password)?;
    println!("Signed in as {}", session.email);

    match service.profile(&session)? {
        Some(profile) => {
            println!();
            print!("{}", format_profile_details(&profile));
        }
        None => println!("No profile on file. Run 'shopfront signup' to complete one."),
    }

    Ok(())
}
