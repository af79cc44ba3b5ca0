//! adminboard CLI — exercise the auth and guard flows from a terminal.
//!
//! Runs against the demo directory by default; set `ADMIN_AUTH_PROVIDER=remote`
//! and `ADMIN_API_BASE_URL` to target a real backend.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use adminboard::config::{AppConfig, ConfigError};
use adminboard::guard;
use adminboard::services::auth::{AuthBackend, AuthClient, AuthError};
use adminboard::services::demo;
use adminboard::state::manager::SessionManager;
use adminboard::state::store::MemoryTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Parser, Debug)]
#[command(name = "adminboard", about = "Admin dashboard auth/session CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the demo directory's credentials.
    DemoCredentials,
    /// Log in and print the resulting session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Validate an access token and print the resolved user.
    Validate {
        #[arg(long)]
        token: String,
    },
    /// Mint a new access token from a refresh token.
    Refresh {
        #[arg(long)]
        token: String,
    },
    /// Decide route access for a path, optionally as an authenticated user.
    Guard {
        #[arg(long)]
        path: String,
        /// Access token to validate first; omit to check as a visitor.
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let auth = AuthClient::from_config(&config)?;

    match cli.command {
        Command::DemoCredentials => {
            for cred in demo::demo_credentials() {
                println!("{:<8} {}  {}", cred.role, cred.email, cred.password);
            }
            Ok(())
        }
        Command::Login { email, password } => run_login(auth, &email, &password).await,
        Command::Validate { token } => {
            let user = auth.validate_token(&token).await?;
            println!("{}", serde_json::to_string_pretty(&user).unwrap_or_default());
            Ok(())
        }
        Command::Refresh { token } => {
            let refreshed = auth.refresh_token(&token).await?;
            println!("user:  {}", refreshed.user.display_name());
            println!("token: {}", refreshed.token);
            Ok(())
        }
        Command::Guard { path, token } => run_guard(auth, &path, token.as_deref()).await,
    }
}

async fn run_login(auth: AuthClient, email: &str, password: &str) -> Result<(), CliError> {
    let mut manager = SessionManager::new(Arc::new(auth), Arc::new(MemoryTokenStore::new()));
    manager.login(email, password).await?;

    let session = manager.session();
    if let Some(user) = &session.user {
        println!("signed in as {} ({})", user.display_name(), user.role);
    }
    if let Some(token) = &session.token {
        println!("token:         {token}");
    }
    if let Some(refresh_token) = &session.refresh_token {
        println!("refresh token: {refresh_token}");
    }
    Ok(())
}

async fn run_guard(auth: AuthClient, path: &str, token: Option<&str>) -> Result<(), CliError> {
    let mut session = adminboard::state::session::Session::default();
    if let Some(token) = token {
        let user = auth.validate_token(token).await?;
        session.initialize_finished(Some((user, token.to_string())));
    }

    match guard::decide_route(&session, path) {
        guard::RouteDecision::Render => println!("render {path}"),
        guard::RouteDecision::RedirectLogin { from } => {
            println!("redirect to /login (return to {from})");
        }
        guard::RouteDecision::RedirectUnauthorized => println!("redirect to /unauthorized"),
        guard::RouteDecision::ShowLoading => println!("loading"),
    }

    if let Some(role) = session.role() {
        let reachable: Vec<&str> = guard::routes_for_role(role).iter().map(|r| r.path).collect();
        println!("reachable as {role}: {}", reachable.join(", "));
    }
    Ok(())
}
