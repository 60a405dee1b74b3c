//! # AgentForge CLI
//!
//! Entry point for the agent generation engine. The default interface is
//! the interactive console wizard; `--ui web` serves the browser shell
//! instead.
//!
//! Usage:
//!   agentforge
//!   agentforge --model claude-2
//!   agentforge --ui web

mod wizard;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "agentforge")]
#[command(author, version, about = "LLM Agent Generation Engine")]
struct Cli {
    /// User interface type
    #[arg(long, value_enum, default_value_t = UiKind::Cli)]
    ui: UiKind,

    /// LLM model to use for generation
    #[arg(long, default_value = "gpt-4")]
    model: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum UiKind {
    Cli,
    Web,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.ui {
        UiKind::Cli => wizard::run(&cli.model).await,
        UiKind::Web => agentforge_web::serve("127.0.0.1:8080", &cli.model).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
