//! Command-line surface for `warta-cli`.

#![deny(clippy::all, clippy::pedantic)]

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "warta-cli", version, about = "Organization content API CLI", long_about = None)]
pub struct Cli {
    /// API origin, e.g. <http://localhost:1337>
    #[arg(long, env = "WARTA_API_URL")]
    pub api_url: Option<String>,

    /// Emit raw JSON instead of formatted lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List news entries
    News(ListArgs),
    /// List articles
    Articles(ListArgs),
    /// List active announcements
    Announcements(ListArgs),
    /// List gallery entries
    Gallery(ListArgs),
    /// Fetch one entry by id, document id, or slug
    Show {
        #[arg(value_enum)]
        collection: ShowCollection,
        identifier: String,
    },
    /// Search titles across collections
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,
    },
    /// List staff members
    Staff {
        #[arg(long)]
        department: Option<String>,
    },
    /// Probe whether the API answers
    Health,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    /// Case-insensitive match in title or content
    #[arg(long)]
    pub search: Option<String>,
    /// Only featured entries
    #[arg(long, default_value_t = false)]
    pub featured: bool,
    /// Entries published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Entries published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// `field:direction`, defaults to publishedAt:desc
    #[arg(long)]
    pub sort: Option<String>,
}

impl ListArgs {
    #[must_use]
    pub fn to_params(&self) -> warta::ListParams {
        warta::ListParams {
            page: self.page,
            page_size: self.page_size,
            category: self.category.clone(),
            author: self.author.clone(),
            search: self.search.clone(),
            featured: self.featured.then_some(true),
            date_from: self.from,
            date_to: self.to,
            sort: self.sort.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ShowCollection {
    News,
    Announcement,
    Gallery,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ScopeArg {
    #[default]
    All,
    News,
    Articles,
}

impl From<ScopeArg> for warta::SearchScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Self::All,
            ScopeArg::News => Self::News,
            ScopeArg::Articles => Self::Articles,
        }
    }
}
