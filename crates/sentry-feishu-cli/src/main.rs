//! sfrelay - Sentry to Feishu relay CLI
//!
//! Exercise a running relay, or render cards locally without one.

mod api;
mod samples;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use std::fs;

use api::{RelayClient, RelayResponse};
use samples::{sample_payload, SampleShape};
use sentry_feishu::{CardRenderer, IgnoreList, InteractiveMessage, PayloadNormalizer};

#[derive(Parser)]
#[command(name = "sfrelay")]
#[command(about = "Sentry to Feishu relay CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Relay base URL
    #[arg(long, global = true, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the relay is up
    Health,

    /// Post a webhook payload from a JSON file
    Send {
        /// Path to the payload file
        file: String,
    },

    /// Post a built-in sample payload
    Sample {
        /// Payload shape to send
        #[arg(short, long, value_enum, default_value = "envelope")]
        shape: SampleShape,
    },

    /// Ask the relay to send its test card
    TestFeishu,

    /// Normalize and render a payload locally, printing the card body
    Render {
        /// Path to the payload file
        file: String,
        /// Ignore list, as a JSON array or comma-separated
        #[arg(short, long)]
        ignore: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RelayClient::new(&cli.url);

    match cli.command {
        Commands::Health => cmd_health(&client).await,
        Commands::Send { file } => cmd_send(&client, &file).await,
        Commands::Sample { shape } => cmd_sample(&client, shape).await,
        Commands::TestFeishu => cmd_test_feishu(&client).await,
        Commands::Render { file, ignore } => cmd_render(&file, ignore.as_deref()),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_health(client: &RelayClient) -> Result<()> {
    print!("Checking relay... ");

    match client.health().await {
        Ok(resp) if resp.is_success() => {
            println!("{}", "OK".green());
            Ok(())
        }
        Ok(resp) => {
            println!("{}", "Failed".red());
            bail!("Relay answered {}", resp.status);
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

async fn cmd_send(client: &RelayClient, file: &str) -> Result<()> {
    let payload = read_payload(file)?;
    let resp = client.send_webhook(&payload).await?;
    report(&resp, "Webhook accepted")
}

async fn cmd_sample(client: &RelayClient, shape: SampleShape) -> Result<()> {
    println!("Sending {} sample...", format!("{shape:?}").to_lowercase().cyan());
    let resp = client.send_webhook(&sample_payload(shape)).await?;
    report(&resp, "Webhook accepted")
}

async fn cmd_test_feishu(client: &RelayClient) -> Result<()> {
    let resp = client.test_feishu().await?;
    report(&resp, "Test notification sent, check the Feishu group")
}

fn cmd_render(file: &str, ignore: Option<&str>) -> Result<()> {
    let payload = read_payload(file)?;
    let ignore_list = ignore.map(IgnoreList::parse).unwrap_or_default();

    match PayloadNormalizer::new(ignore_list).normalize(&payload) {
        Ok(event) => {
            let card = CardRenderer::new().render(&event.issue);
            let body = InteractiveMessage::new(card);
            println!("{} {}", "Action:".bold(), event.action);
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(rejected) if rejected.is_ignored() => {
            println!("{} {}", "Ignored:".yellow(), rejected);
            Ok(())
        }
        Err(rejected) => bail!("{}", rejected),
    }
}

// ============================================
// Helpers
// ============================================

fn read_payload(file: &str) -> Result<Value> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", file))
}

fn report(resp: &RelayResponse, success_note: &str) -> Result<()> {
    let status = if resp.is_success() {
        resp.status.to_string().green()
    } else {
        resp.status.to_string().red()
    };
    println!("{} {}", "Status:".bold(), status);
    println!("{}", serde_json::to_string_pretty(&resp.body)?);

    if !resp.is_success() {
        bail!("Relay answered {}", resp.status);
    }

    if resp.body.get("status").and_then(Value::as_str) == Some("ignored") {
        println!("\n{} Event ignored by the relay", "•".yellow());
    } else {
        println!("\n{} {}", "✓".green(), success_note);
    }
    Ok(())
}
