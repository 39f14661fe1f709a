//! Minimal command-line client for the Courtside session layer.
//!
//! ```text
//! login-cli login <email> <password>   sign in and persist the session
//! login-cli whoami                     re-validate and print the session
//! login-cli logout                     end the session everywhere
//! ```
//!
//! Configuration via environment:
//! - `COURTSIDE_API_URL`  — backend base URL (default http://127.0.0.1:8080/api/v1)
//! - `COURTSIDE_DATA_DIR` — where tokens and the snapshot live (default .courtside)

use std::env;
use std::process::ExitCode;

use courtside::prelude::*;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut builder = SessionBuilder::new();
    if let Ok(url) = env::var("COURTSIDE_API_URL") {
        builder = builder.base_url(url);
    }
    if let Ok(dir) = env::var("COURTSIDE_DATA_DIR") {
        builder = builder.data_dir(dir);
    }

    let mut session = match builder.build() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("failed to set up session: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.as_slice() {
        [cmd, email, password] if cmd == "login" => {
            if session
                .login(&Credentials::new(email.clone(), password.clone()))
                .await
            {
                print_user(session.session());
                ExitCode::SUCCESS
            } else {
                eprintln!(
                    "login failed: {}",
                    session.session().error.as_deref().unwrap_or("unknown")
                );
                ExitCode::FAILURE
            }
        }
        [cmd] if cmd == "whoami" => {
            session.fetch_current_user().await;
            if session.session().is_authenticated {
                print_user(session.session());
                ExitCode::SUCCESS
            } else {
                eprintln!("not signed in");
                ExitCode::FAILURE
            }
        }
        [cmd] if cmd == "logout" => {
            session.logout().await;
            println!("signed out");
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: login-cli <login <email> <password> | whoami | logout>");
            ExitCode::FAILURE
        }
    }
}

fn print_user(session: &Session) {
    // Guarded by is_authenticated at every call site.
    let user = session.user.as_ref().expect("authenticated session");
    println!(
        "{} <{}> ({}{})",
        user.name.as_deref().unwrap_or("<unnamed>"),
        user.email,
        user.role,
        if user.email_verified { "" } else { ", unverified" }
    );
}
