//! Sign-up, sign-in, sign-out and whoami commands.

use anyhow::Result;
use pulse_core::session::Session;

use crate::app::AppContext;

fn print_session(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
    } else {
        println!("Signed in as {} <{}>", session.username, session.email);
    }
    Ok(())
}

pub async fn signup(
    context: &AppContext,
    name: &str,
    email: &str,
    password: &str,
    json: bool,
) -> Result<()> {
    let session = context
        .session_usecase
        .sign_up(name, email, password)
        .await?;
    print_session(&session, json)
}

pub async fn signin(
    context: &AppContext,
    email: &str,
    password: &str,
    json: bool,
) -> Result<()> {
    let session = context.session_usecase.sign_in(email, password).await?;
    print_session(&session, json)
}

pub async fn signout(context: &AppContext) -> Result<()> {
    if !context.session_usecase.is_authenticated().await {
        println!("Not signed in.");
        return Ok(());
    }
    context.session_usecase.sign_out().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(context: &AppContext, json: bool) -> Result<()> {
    match context.session_usecase.current_session().await {
        Some(session) => print_session(&session, json),
        None => {
            println!("Not signed in.");
            Ok(())
        }
    }
}
