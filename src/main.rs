use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use mensaplan_telegram_rs::constants::{HTTP_TIMEOUT, MENU_URL};
use mensaplan_telegram_rs::meal_extractor::extract_meals;
use mensaplan_telegram_rs::menu_fetcher::fetch_menu;
use mensaplan_telegram_rs::message_formatter::format_meals;
use mensaplan_telegram_rs::notification_sender::send_telegram;

/// Sends today's meal plan from the Studentenwerk web menu to a Telegram chat.
/// {n}Runs once and exits, scheduling is left to cron/systemd timers.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The telegram bot token to be used
    #[arg(short, long, env)]
    token: String,
    /// The Chat-ID which will receive the meal plan
    #[arg(short, long, env)]
    chatid: String,
    /// URL of the web menu page
    #[arg(long, env, default_value = MENU_URL)]
    menu_url: String,
    /// Enable verbose logging (mostly performance metrics){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    logger_init();

    if let Err(e) = run(&args).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let now = Instant::now();
    let meals = {
        let document = fetch_menu(&client, &args.menu_url)
            .await
            .context("failed to fetch the meal plan")?;
        extract_meals(&document)
    };
    log::debug!("fetch + extract: {:.2?}", now.elapsed());

    let msg = format_meals(&meals);

    let now = Instant::now();
    send_telegram(&client, &args.token, &args.chatid, &msg)
        .await
        .context("failed to deliver message to Telegram")?;
    log::debug!("send: {:.2?}", now.elapsed());

    if meals.is_empty() {
        log::info!("No meals found, sent empty-menu notice");
    } else {
        log::info!("Sent meal plan with {} meals", meals.len());
    }

    Ok(())
}

fn logger_init() {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(
            module_path!(),
            if std::env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
                == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}
