use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;

use tickdeck::config::Config;
use tickdeck::feed::client::PriceFeed;
use tickdeck::input::{parse_main_command, UiCommand};
use tickdeck::ui::{self, AppState};

const LOG_FILE: &str = "tickdeck.log";

#[tokio::main]
async fn main() -> Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure config/default.toml exists; PRICE_FEED_URL overrides feed.url");
            std::process::exit(1);
        }
    };

    let log_file = std::fs::File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        url = %config.feed.url,
        symbol = %config.feed.symbol,
        "Starting tickdeck"
    );

    let (quit_tx, quit_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, shutting down");
            let _ = quit_tx.send(true);
        }
    });

    let feed = PriceFeed::new(&config.feed.url);
    let mut app_state = AppState::new(&config.feed.symbol, &config.feed.company);
    app_state.push_log(format!("tickdeck started | feed: {}", config.feed.url));

    // first mount: empty history, then exactly one connection
    app_state.reset_for_mount();
    let mut feed_handle = feed.connect();

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| ui::render(frame, &app_state))?;

        if crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            if let Event::Key(key) = crossterm::event::read()? {
                match parse_main_command(&key.code) {
                    Some(UiCommand::Quit) => {
                        tracing::info!("Quit requested");
                        break;
                    }
                    Some(UiCommand::ToggleTheme) => {
                        app_state.theme.toggle();
                        app_state
                            .push_log(format!("Theme switched to {}", app_state.theme.label()));
                    }
                    Some(UiCommand::Refresh) => {
                        tracing::info!("Refresh requested, remounting dashboard");
                        feed_handle.close();
                        app_state.reset_for_mount();
                        app_state.push_log("Refreshing: history cleared, reconnecting".to_string());
                        feed_handle = feed.connect();
                    }
                    None => {}
                }
            }
        }

        while let Ok(record) = feed_handle.records.try_recv() {
            app_state.apply_record(record);
        }
        while let Ok(event) = feed_handle.events.try_recv() {
            app_state.apply(event);
        }

        if *quit_rx.borrow() {
            break;
        }
    }

    feed_handle.close();
    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Session details are in {}", LOG_FILE);
    Ok(())
}
