use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use socratic::cli::run_chat;
use socratic::connector::serve;
use socratic::{ChatSession, Commands, Container, ContainerConfig, HttpTurnGateway};

#[derive(Parser)]
#[command(name = "socratic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve {
            port,
            public,
            mock_upstream,
        } => {
            let container = Arc::new(Container::new(ContainerConfig::from_env(mock_upstream)));
            let host = if public { "0.0.0.0" } else { "127.0.0.1" };
            let listener = TcpListener::bind((host, port)).await?;
            serve(container, listener).await?;
        }

        Commands::Chat { url } => {
            let gateway = Arc::new(HttpTurnGateway::new(url));
            info!("Chatting via {}", gateway.url());
            let mut session = ChatSession::new(gateway);
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_chat(&mut session, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
