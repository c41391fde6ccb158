use chrono::Utc;

use crate::app::{AppContext, NewsdeskError, Result};
use crate::catalog::{query, DateRange, SearchFilters, SortBy};
use crate::cli::TopBy;
use crate::domain::{Article, ThemeMode, UserProfile};
use crate::pager::Pager;
use crate::server;

async fn find_article(ctx: &AppContext, id: &str) -> Result<Article> {
    ctx.repository
        .fetch_by_id(id)
        .await
        .ok_or_else(|| NewsdeskError::ArticleNotFound(id.to_string()))
}

fn print_article_line(article: &Article) {
    let marker = if article.bookmarked { "*" } else { " " };
    println!(
        "{} {} [{}] {} ({})",
        marker,
        article.published_at().format("%Y-%m-%d"),
        article.category_id,
        article.title,
        article.id
    );
}

/// Print page `page` of `articles`, paging forward from the first page.
fn print_page(articles: Vec<Article>, page_size: usize, page: usize) {
    let mut pager = Pager::new(articles, page_size);
    while pager.current_page() < page && pager.has_next_page() {
        pager.advance();
    }

    let items = pager.current_page_items();
    if items.is_empty() {
        println!("No articles");
        return;
    }

    for article in &items {
        print_article_line(article);
    }
    println!(
        "Page {} of {} ({} articles)",
        pager.current_page(),
        pager.total_pages(),
        pager.len()
    );
    if pager.has_next_page() {
        println!("Next: --page {}", pager.current_page() + 1);
    }
}

pub async fn serve(
    ctx: &AppContext,
    host: Option<String>,
    port: Option<u16>,
    error_rate: Option<f64>,
) -> Result<()> {
    let mut config = ctx.config.server.clone();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(rate) = error_rate {
        config.error_rate = rate.clamp(0.0, 1.0);
    }

    let handle = server::start(&config, ctx.catalog.clone()).await?;
    println!("Serving {} articles at {}", ctx.catalog.len(), handle.base_url());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;
    handle.stop().await
}

pub async fn list_categories(ctx: &AppContext) -> Result<()> {
    let categories = ctx.catalog.categories();
    let ids: Vec<String> = categories.iter().map(|c| c.id.clone()).collect();
    let sections = ctx
        .repository
        .fetch_sections(&ids, ctx.config.listing.category_fetch_limit)
        .await;

    for (category, (_, articles)) in categories.iter().zip(&sections) {
        println!("{} ({}, {} articles)", category.name, category.id, articles.len());
        if category.has_subcategories() {
            println!("  {}", category.subcategories.join(", "));
        }
    }
    Ok(())
}

pub async fn list_articles(
    ctx: &AppContext,
    category: Option<&str>,
    page: usize,
    limit: Option<usize>,
) -> Result<()> {
    let mut articles = match category {
        Some(category) => {
            if !ctx.catalog.is_valid_category(category) {
                println!("Unknown category: {}", category);
                return Ok(());
            }
            let fetch_limit = ctx.config.listing.category_fetch_limit;
            let mut articles = ctx.repository.fetch_by_category(category, 1, fetch_limit).await;
            query::sort_newest_first(&mut articles);
            articles
        }
        None => ctx.repository.fetch_latest(usize::MAX).await,
    };
    ctx.bookmarks().sync(&mut articles)?;

    if let Some(category) = category {
        println!("{}", ctx.catalog.display_name(category));
    }
    print_page(articles, limit.unwrap_or(ctx.config.listing.page_size), page);
    Ok(())
}

pub async fn show_article(ctx: &AppContext, id: &str) -> Result<()> {
    let mut article = find_article(ctx, id).await?;
    ctx.bookmarks().sync(std::slice::from_mut(&mut article))?;
    ctx.social().apply(&mut article)?;
    ctx.progress().apply(&mut article)?;

    println!("{}", article.title);
    println!(
        "By {} | {} | {}",
        article.display_author(),
        ctx.catalog.display_name(&article.category_id),
        article.published_at().format("%Y-%m-%d %H:%M")
    );
    println!(
        "{} views, {} likes{}, {} shares{}",
        article.view_count,
        article.like_count,
        if article.liked { " (you)" } else { "" },
        article.share_count,
        if article.shared { " (you)" } else { "" }
    );
    if article.bookmarked {
        println!("Bookmarked");
    }
    if article.reading_progress > 0 {
        println!("Read {}%", article.reading_progress);
    }
    println!();
    println!("{}", article.content);
    Ok(())
}

pub fn search(
    ctx: &AppContext,
    query: &str,
    sort_by: SortBy,
    date_range: DateRange,
    category: Option<String>,
    page: usize,
) -> Result<()> {
    ctx.search_history().add(query)?;

    let filters = SearchFilters {
        sort_by,
        date_range,
        category,
        subcategory: None,
    };
    let mut results = filters.apply(&ctx.catalog.search(query), Utc::now());
    ctx.bookmarks().sync(&mut results)?;

    println!("Results for \"{}\"", query.trim());
    print_page(results, ctx.config.listing.page_size, page);
    Ok(())
}

pub async fn top(ctx: &AppContext, by: TopBy, limit: usize) -> Result<()> {
    let mut articles = match by {
        TopBy::Views => ctx.repository.fetch_popular(limit).await,
        TopBy::Likes => query::top_by_likes(&ctx.repository.fetch_all().await, limit),
        TopBy::Newest => ctx.repository.fetch_latest(limit).await,
    };
    ctx.bookmarks().sync(&mut articles)?;

    for article in &articles {
        print_article_line(article);
    }
    Ok(())
}

pub async fn toggle_bookmark(ctx: &AppContext, id: &str) -> Result<()> {
    let mut article = find_article(ctx, id).await?;
    if ctx.bookmarks().toggle(&mut article)? {
        println!("Bookmarked: {}", article.title);
    } else {
        println!("Removed bookmark: {}", article.title);
    }
    Ok(())
}

pub fn list_bookmarks(ctx: &AppContext) -> Result<()> {
    let articles = ctx.bookmarks().bookmarked_articles(&ctx.catalog)?;
    if articles.is_empty() {
        println!("No bookmarks");
        return Ok(());
    }

    for article in &articles {
        print_article_line(article);
    }
    Ok(())
}

pub fn history(ctx: &AppContext, clear: bool, remove: Option<&str>) -> Result<()> {
    let history = ctx.search_history();
    if clear {
        history.clear()?;
        println!("Search history cleared");
        return Ok(());
    }
    if let Some(query) = remove {
        history.remove(query)?;
    }

    let entries = history.entries()?;
    if entries.is_empty() {
        println!("No recent searches");
        return Ok(());
    }
    for (i, query) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, query);
    }
    Ok(())
}

pub async fn save_progress(ctx: &AppContext, id: &str, percent: i64) -> Result<()> {
    let mut article = find_article(ctx, id).await?;
    ctx.progress().save(&mut article, percent)?;
    println!("{}: {}%", article.title, article.reading_progress);
    Ok(())
}

pub async fn continue_reading(ctx: &AppContext) -> Result<()> {
    let articles = ctx.repository.fetch_all().await;
    let started = ctx.progress().continue_reading(&articles)?;
    if started.is_empty() {
        println!("Nothing in progress");
        return Ok(());
    }

    for article in &started {
        println!("{:>3}% {} ({})", article.reading_progress, article.title, article.id);
    }
    Ok(())
}

pub fn stats(ctx: &AppContext) -> Result<()> {
    let stats = ctx.progress().stats()?;
    let bookmarks = ctx.bookmarks().bookmarked_ids()?.len();

    println!("Started:   {}", stats.started);
    println!("Completed: {}", stats.completed);
    println!("Completion rate: {:.0}%", stats.completion_rate());
    println!("Bookmarks: {}", bookmarks);
    Ok(())
}

pub async fn toggle_like(ctx: &AppContext, id: &str) -> Result<()> {
    let mut article = find_article(ctx, id).await?;
    let social = ctx.social();
    social.apply(&mut article)?;

    let liked = social.toggle_like(&mut article)?;
    println!(
        "{} {} ({} likes)",
        if liked { "Liked" } else { "Unliked" },
        article.title,
        article.like_count
    );
    Ok(())
}

pub async fn share(ctx: &AppContext, id: &str) -> Result<()> {
    let mut article = find_article(ctx, id).await?;
    if ctx.social().record_share(&mut article)? {
        println!("Shared {} ({} shares)", article.title, article.share_count);
    } else {
        println!("Already shared {}", article.title);
    }
    Ok(())
}

pub fn theme(ctx: &AppContext, mode: Option<ThemeMode>) -> Result<()> {
    let theme = ctx.theme();
    if let Some(mode) = mode {
        theme.save(mode)?;
    }
    println!("Theme: {}", theme.current()?);
    Ok(())
}

pub fn login(ctx: &AppContext, user: UserProfile) -> Result<()> {
    ctx.session().create_login_session(&user)?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.session().logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.session().user()? {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            if let Some(bio) = user.bio {
                println!("{}", bio);
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
