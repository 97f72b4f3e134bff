// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::time::Duration;

use clap::Parser;
use cli::{Cli, Commands};
use vertex_chat_core::actions::LinkActionRecorder;
use vertex_chat_core::config::ChatConfig;
use vertex_chat_core::responder::{ChatBackend, SimulatedBackend};

mod cli;
mod logging;
mod session;

fn main() -> Result<()> {
    let _logger = logging::init()?;

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let mut config = ChatConfig::from_env()?;
    if let Some(ms) = args.latency_ms {
        config.latency = Duration::from_millis(ms);
    }

    // One request in flight at a time, so a single-threaded runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let backend = SimulatedBackend::new(&config);
    let recorder = LinkActionRecorder::new();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Ask { query } => {
            let query = query.join(" ");
            let reply = runtime.block_on(backend.respond(&query)).content;
            session::print_reply(&mut std::io::stdout().lock(), &reply)?;
        }
        Commands::Click { href } => {
            recorder.record(href);
        }
        Commands::Chat => {
            let stdin = std::io::stdin();
            session::run(
                &runtime,
                &backend,
                &recorder,
                stdin.lock(),
                &mut std::io::stdout(),
            )?;
        }
    }

    Ok(())
}
