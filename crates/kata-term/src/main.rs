use std::panic;

use anyhow::Result;
use kata_term::application::cli;
use kata_term::configuration::Config;
use kata_term::destruct_terminal_for_panic;
use kata_term::start_loop;
use tracing_appender::non_blocking::WorkerGuard;

fn setup_panic_handler() {
    panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}

fn setup_tracing() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kata");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "kata-term.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    return Ok(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let matches = cli::build().get_matches();
    if !cli::handle_subcommands(&matches)? {
        return Ok(());
    }

    Config::load(cli::build(), vec![&matches]).await?;
    let _guard = setup_tracing()?;

    return start_loop().await;
}
