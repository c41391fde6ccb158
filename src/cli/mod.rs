pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{DateRange, SortBy};
use crate::domain::ThemeMode;

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Browse a categorized news catalog from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the preferences database
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Ask the configured backend before falling back to the local catalog
    #[arg(long, global = true)]
    pub remote: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TopBy {
    #[default]
    Views,
    Likes,
    Newest,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the fake API server until Ctrl+C
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        /// Share of requests answered with a simulated 500 (0.0-1.0)
        #[arg(long)]
        error_rate: Option<f64>,
    },
    /// List categories and their subcategories
    Categories,
    /// List articles, newest first
    List {
        /// Only articles of this category
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Articles per page (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one article
    Show {
        id: String,
    },
    /// Search titles, bodies and authors
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = SortBy::Relevance)]
        sort: SortBy,
        #[arg(long, value_enum, default_value_t = DateRange::AllTime)]
        range: DateRange,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Most popular or newest articles
    Top {
        #[arg(long, value_enum, default_value_t = TopBy::Views)]
        by: TopBy,
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Toggle the bookmark on an article
    Bookmark {
        id: String,
    },
    /// List bookmarked articles
    Bookmarks,
    /// Show or edit recent searches
    History {
        #[arg(long)]
        clear: bool,
        /// Forget one query
        #[arg(long, value_name = "QUERY")]
        remove: Option<String>,
    },
    /// Record how far into an article you are (0-100)
    Progress {
        id: String,
        #[arg(allow_negative_numbers = true)]
        percent: i64,
    },
    /// Articles started but not finished
    Continue,
    /// Reading statistics
    Stats,
    /// Toggle the like on an article
    Like {
        id: String,
    },
    /// Record a share of an article
    Share {
        id: String,
    },
    /// Show or set the theme (light, dark, system)
    Theme {
        mode: Option<ThemeMode>,
    },
    /// Start a local session
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        photo_url: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// End the local session
    Logout,
    /// Show the signed-in user
    Whoami,
}
