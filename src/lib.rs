//! # newsdesk
//!
//! A categorized news catalog with search, bookmarks and reading progress,
//! backed by a built-in sample catalog and an optional HTTP backend.
//!
//! ## Architecture
//!
//! ```text
//! Catalog (ContentStore + query) → Repository (remote or fallback) → CLI
//!                                        ↑
//!             RemoteSource (HTTP client / in-process fake) ← fake API server
//!
//! Store (SQLite) → prefs (bookmarks, history, progress, social, session, theme)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the built-in catalog
//! newsdesk list --category tech
//! newsdesk search android --sort date-newest
//!
//! # Run the fake backend and read through it
//! newsdesk serve --port 8080
//! newsdesk --remote top --by views
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the catalog,
/// the repository and the preference store.
pub mod app;

/// The article catalog and the pure queries over it.
///
/// - [`ContentStore`](catalog::ContentStore): lazily built, read-only article list
/// - [`query`](catalog::query): filters, search, rankings and listing pages
/// - [`SearchFilters`](catalog::SearchFilters): sort and date-range narrowing
pub mod catalog;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/newsdesk/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): a news article plus client-local flags
/// - [`Category`](domain::Category): a top-level category and its tags
/// - [`ThemeMode`](domain::ThemeMode), [`UserProfile`](domain::UserProfile),
///   [`ReadingStats`](domain::ReadingStats): preference values
pub mod domain;

/// Forward-only paging over a list snapshot.
pub mod pager;

/// Persisted preferences, one service per namespace.
pub mod prefs;

/// Backend clients.
///
/// - [`RemoteSource`](remote::RemoteSource): async trait for article backends
/// - [`HttpSource`](remote::HttpSource): reqwest client for the JSON API
/// - [`FakeSource`](remote::FakeSource): in-process backend with simulated faults
pub mod remote;

/// Remote-first article access that falls back to the catalog.
pub mod repository;

/// Fake API server built on axum.
pub mod server;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): namespaced key-value trait
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
