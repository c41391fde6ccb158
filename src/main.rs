use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdesk::app::AppContext;
use newsdesk::cli::{commands, Cli, Commands};
use newsdesk::config::Config;
use newsdesk::domain::UserProfile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsdesk=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if cli.remote {
        config.api.use_remote = true;
    }
    let ctx = AppContext::new(config, cli.db)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            error_rate,
        } => {
            commands::serve(&ctx, host, port, error_rate).await?;
        }
        Commands::Categories => {
            commands::list_categories(&ctx).await?;
        }
        Commands::List {
            category,
            page,
            limit,
        } => {
            commands::list_articles(&ctx, category.as_deref(), page, limit).await?;
        }
        Commands::Show { id } => {
            commands::show_article(&ctx, &id).await?;
        }
        Commands::Search {
            query,
            sort,
            range,
            category,
            page,
        } => {
            commands::search(&ctx, &query, sort, range, category, page)?;
        }
        Commands::Top { by, limit } => {
            commands::top(&ctx, by, limit).await?;
        }
        Commands::Bookmark { id } => {
            commands::toggle_bookmark(&ctx, &id).await?;
        }
        Commands::Bookmarks => {
            commands::list_bookmarks(&ctx)?;
        }
        Commands::History { clear, remove } => {
            commands::history(&ctx, clear, remove.as_deref())?;
        }
        Commands::Progress { id, percent } => {
            commands::save_progress(&ctx, &id, percent).await?;
        }
        Commands::Continue => {
            commands::continue_reading(&ctx).await?;
        }
        Commands::Stats => {
            commands::stats(&ctx)?;
        }
        Commands::Like { id } => {
            commands::toggle_like(&ctx, &id).await?;
        }
        Commands::Share { id } => {
            commands::share(&ctx, &id).await?;
        }
        Commands::Theme { mode } => {
            commands::theme(&ctx, mode)?;
        }
        Commands::Login {
            id,
            name,
            email,
            photo_url,
            bio,
        } => {
            let user = UserProfile {
                id,
                name,
                email,
                photo_url,
                bio,
            };
            commands::login(&ctx, user)?;
        }
        Commands::Logout => {
            commands::logout(&ctx)?;
        }
        Commands::Whoami => {
            commands::whoami(&ctx)?;
        }
    }

    Ok(())
}
