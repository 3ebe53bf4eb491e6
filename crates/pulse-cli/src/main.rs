use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "DevPulse - track your learning and coding activity", long_about = None)]
struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with existing credentials
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and remove the stored session
    Signout,
    /// Show who is currently signed in
    Whoami,
    /// Load and render the dashboard
    Dashboard {
        /// Days of activity history to chart (default: 7)
        #[arg(long)]
        days: Option<usize>,
    },
    /// Show a user's profile
    Profile { username: String },
    /// Log a learning activity
    Log {
        /// Activity date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long)]
        note: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Composition root: config, capabilities and rehydration all happen
    // before any command runs.
    let context = app::bootstrap(None).await?;

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&context, &name, &email, &password, cli.json).await,
        Commands::Signin { email, password } => {
            commands::auth::signin(&context, &email, &password, cli.json).await
        }
        Commands::Signout => commands::auth::signout(&context).await,
        Commands::Whoami => commands::auth::whoami(&context, cli.json).await,
        Commands::Dashboard { days } => {
            commands::dashboard::show_dashboard(&context, days, cli.json).await
        }
        Commands::Profile { username } => {
            commands::dashboard::show_profile(&context, &username, cli.json).await
        }
        Commands::Log { date, count, note } => {
            commands::dashboard::log_activity(&context, date, count, note).await
        }
    }
}
