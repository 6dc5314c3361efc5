use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::OpeningPhase;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use crate::commands::{Command, ParseError};
use crate::config::Config;
use crate::error::ConsoleError;
use crate::opener::CaseOpener;

mod commands;
mod config;
mod error;
mod logging;
mod opener;
mod render;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = logging::setup() {
        eprintln!("Failed to set up logging: {}", e);
    }

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConsoleError> {
    let config = Config::from_env()?;
    let catalog = Arc::new(config.load_catalog()?);
    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Catalog ready with {} cases, reveal delay {:?}",
        catalog.list_cases().len(),
        config.reveal_delay
    );

    let opener = CaseOpener::new(catalog, config.reveal_delay, rng);
    let announcer = tokio::spawn(announce_reveals(opener.clone()));

    println!("{}\n\n{}", render::banner(), render::cases(&opener.list_cases()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match commands::execute(&opener, command) {
            Some(output) => println!("{}", output),
            None if command == Command::Quit => break,
            None => {}
        }
    }

    announcer.abort();
    opener.close_session();
    info!("Session over, {} items won", opener.inventory().len());
    Ok(())
}

/// Prints the prize as soon as a pending opening is revealed.
async fn announce_reveals(opener: CaseOpener) {
    let mut phases = opener.subscribe();
    while phases.changed().await.is_ok() {
        let phase = *phases.borrow_and_update();
        if phase == OpeningPhase::Revealed {
            if let Some(item) = opener.revealed_item() {
                println!("{}", render::reveal(&item));
            }
        }
    }
}
