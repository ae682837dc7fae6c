// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use site_news::config::validation::validate_config;
use site_news::config::{Config, normalize_site_url};
use site_news::error::AppError;
use site_news::events::{ChannelEvents, SiteEvent};
use site_news::news::http_client::create_http_client_with_timeout;
use site_news::news::urls::build_news_url;
use site_news::news::{NewsSource, NewsStore};
use site_news::site::Site;
use site_news::surface::Document;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        return run_config_operation(args).await;
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let source = resolve_source(&args, &config)?;
    info!("News source: {}", source.describe());

    let mut site = Site::new(
        NewsStore::new(source),
        Document::site_skeleton(),
        &args.fragment,
    );

    let (sender, mut events) = ChannelEvents::channel();
    queue(&sender, SiteEvent::DomContentLoaded);
    for fragment in &args.navigate {
        queue(&sender, SiteEvent::HashChange(fragment.clone()));
    }
    if args.back {
        queue(&sender, SiteEvent::BackToList);
    }
    if let Some(y) = args.scroll {
        queue(&sender, SiteEvent::Scroll { y });
    }

    if args.stdin {
        tokio::spawn(forward_stdin(sender));
    } else {
        drop(sender);
    }

    site.run(&mut events).await;
    info!(
        fragment = site.address().fragment(),
        load_failed = site.store().load_failed(),
        "Finished processing events"
    );

    let html = site.surface().to_html();
    match &args.output {
        Some(path) => tokio::fs::write(path, html).await?,
        None => print!("{html}"),
    }

    Ok(())
}

fn queue(sender: &UnboundedSender<SiteEvent>, event: SiteEvent) {
    if let Err(e) = sender.send(event) {
        warn!("Dropping event, site is no longer listening: {:?}", e.0);
    }
}

/// Sends each non-empty stdin line as a hash change until end of input.
async fn forward_stdin(sender: UnboundedSender<SiteEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let fragment = line.trim();
                if fragment.is_empty() {
                    continue;
                }
                if sender
                    .send(SiteEvent::HashChange(fragment.to_string()))
                    .is_err()
                {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Stopped reading stdin: {e}");
                break;
            }
        }
    }
}

fn resolve_source(args: &Args, config: &Config) -> Result<NewsSource, AppError> {
    if let Some(path) = &args.news_file {
        return Ok(NewsSource::local(path));
    }

    let site_url = args
        .site_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| config.site_url.clone());

    if site_url.is_empty() {
        return Err(AppError::no_source(
            "pass --site-url or --news-file, or store a URL with --set-site-url",
        ));
    }
    validate_config(&site_url, &None, config.http_timeout_seconds)?;

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    Ok(NewsSource::remote(
        client,
        build_news_url(&normalize_site_url(&site_url)),
    ))
}

async fn run_config_operation(args: Args) -> Result<(), AppError> {
    if args.list_config {
        return Config::display().await;
    }

    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path)
        .await
        .unwrap_or_default();

    if let Some(site_url) = args.new_site_url {
        config.site_url = site_url;
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
