use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tourai::agent::TourismAgent;
use tourai::config::TourAiConfig;
use tourai::{logging, web};

const EXIT_WORDS: &[&str] = &["quit", "exit", "bye", "q"];
const RULE: &str = "==================================================";

#[derive(Parser)]
#[command(
    name = "tourai",
    author,
    version,
    about = "Travel assistant answering weather and sightseeing questions",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "TOURAI_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question, e.g. `tourai ask "Weather in Paris"`
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Interactive question loop
    Chat,
    /// Run the web chat server
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TourAiConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);

    let agent = TourismAgent::from_config(&config)
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to initialise travel services")?;

    match cli.command {
        Commands::Ask { text } => {
            println!("{}", agent.process_request(&text.join(" ")));
        }
        Commands::Chat => chat(&agent)?,
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            serve(Arc::new(agent), &config.server.host, port)?;
        }
    }

    Ok(())
}

fn chat(agent: &TourismAgent) -> Result<()> {
    println!("Welcome to TourAI!");
    println!("{RULE}");
    println!("Ask about the weather, places to visit, or both.");
    println!();
    println!("Examples:");
    println!("  • I'm going to Bangalore, what's the temperature?");
    println!("  • What places can I visit in Paris?");
    println!("  • Tell me about Tokyo");
    println!("  • Type 'quit' to exit");
    println!("{RULE}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nYou: ");
        stdout.flush().context("Failed to write prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let query = line.trim();

        if EXIT_WORDS.contains(&query.to_lowercase().as_str()) {
            break;
        }
        if query.is_empty() {
            println!("Please enter a valid query.");
            continue;
        }

        println!("\n{}", agent.process_request(query));
        println!("{RULE}");
    }

    println!("\nThank you for using TourAI!");
    Ok(())
}

/// The agent's blocking HTTP clients must not be dropped inside the async
/// runtime, so the caller's handle outlives it.
fn serve(agent: Arc<TourismAgent>, host: &str, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    info!("Starting web server on {}:{}", host, port);
    let result = runtime.block_on(web::run(Arc::clone(&agent), host, port));
    drop(runtime);
    drop(agent);
    result
}
