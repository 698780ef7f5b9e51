//! warta-cli: read-only command-line client for the organization content API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod print;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands, ShowCollection};
use warta::{ClientConfig, ContentService};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] warta::ConfigError),
    #[error(transparent)]
    Fetch(#[from] warta::FetchError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("not found: {0}")]
    NotFound(String),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = match &cli.api_url {
        Some(origin) => ClientConfig::new(origin)?,
        None => ClientConfig::from_env()?,
    };
    let service = ContentService::new(config)?;

    match &cli.command {
        Commands::News(list) => {
            let page = service.list_news(&list.to_params()).await;
            if cli.json {
                print::print_json(&page)?;
            } else {
                print::page(&page);
            }
        }
        Commands::Articles(list) => {
            let page = service.list_articles(&list.to_params()).await;
            if cli.json {
                print::print_json(&page)?;
            } else {
                print::page(&page);
            }
        }
        Commands::Announcements(list) => {
            let page = service.list_announcements(&list.to_params()).await;
            if cli.json {
                print::print_json(&page)?;
            } else {
                print::page(&page);
            }
        }
        Commands::Gallery(list) => {
            let page = service.list_gallery(&list.to_params()).await;
            if cli.json {
                print::print_json(&page)?;
            } else {
                print::page(&page);
            }
        }
        Commands::Show {
            collection,
            identifier,
        } => {
            let item = match collection {
                ShowCollection::News => service.resolve_news(identifier).await,
                ShowCollection::Announcement => service.resolve_announcement(identifier).await,
                ShowCollection::Gallery => service.resolve_gallery(identifier).await,
            }
            .ok_or_else(|| CliError::NotFound(identifier.clone()))?;
            if cli.json {
                print::print_json(&item)?;
            } else {
                print::detail(&item);
            }
        }
        Commands::Search { query, scope } => {
            let results = service.search(query, (*scope).into()).await;
            if cli.json {
                print::print_json(&results)?;
            } else {
                print::search_results(&results);
            }
        }
        Commands::Staff { department } => {
            let members = match department {
                Some(department) => service.staff_by_department(department).await,
                None => service.staff_list().await,
            };
            if cli.json {
                print::print_json(&members)?;
            } else {
                print::staff(&members);
            }
        }
        Commands::Health => {
            if service.check_health().await {
                println!("ok");
            } else {
                eprintln!("unreachable: {}", service.config().api_origin);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
