mod api;
mod config;
mod errors;
mod handlers;
mod i18n;
mod model;
mod pager;
mod prefs;
mod session;
mod state;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use teloxide::prelude::*;

use crate::api::RebrickableClient;
use crate::config::{Config, FETCH_TIMEOUT_MS, REBRICKABLE_BASE_URL};
use crate::errors::BotError;
use crate::prefs::FileLangStore;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
    name = "brickalts",
    version,
    about = "Telegram bot for browsing Rebrickable alternate builds."
)]
struct Args {
    /// Path to the language preference file.
    #[arg(long)]
    prefs: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), BotError> {
    let config = Config::from_env(args.prefs)?;
    let api = RebrickableClient::new(
        REBRICKABLE_BASE_URL.to_string(),
        config.api_key.clone(),
        FETCH_TIMEOUT_MS,
    )?;
    let prefs = FileLangStore::load(config.prefs_path.clone());
    let state = Arc::new(AppState::new(api, Box::new(prefs)));

    let bot = Bot::new(config.bot_token.clone());
    log::info!("bot is running");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handlers::message::handle_message))
        .branch(Update::filter_callback_query().endpoint(handlers::callback::handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
