mod cli;

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_book::{
    ui, util, App, ClockTicker, Config, Database, MemorySlot, RecipeBook, SqliteSlot, SystemClock,
};

use cli::{Cli, Commands};

fn init_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn open_book(cli: &Cli, config: &Config) -> Result<RecipeBook> {
    if cli.ephemeral {
        return Ok(RecipeBook::open(MemorySlot::new(), config));
    }
    let db = Database::open_default().context("Failed to open recipe database")?;
    Ok(RecipeBook::open(SqliteSlot::new(db.connection()), config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Must happen before any path lookups
    util::init_data_dir(cli.data_dir.clone());
    init_logging()?;

    let config = Config::load();
    let mut book = open_book(&cli, &config)?;

    match &cli.command {
        Some(Commands::List(args)) => cli::run_list(&book, args),
        Some(Commands::Add(args)) => cli::run_add(&mut book, args),
        Some(Commands::Remove(args)) => cli::run_remove(&mut book, args),
        Some(Commands::ShowConfig) => cli::run_show_config(&config),
        None => {
            ui::install_panic_hook();
            let ticker = ClockTicker::spawn(Arc::new(SystemClock), config.clock_tick);
            let mut app = App::new(book, ticker);
            app.run().await
        }
    }
}
