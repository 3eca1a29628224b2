use anyhow::{Context, Result};
use colored::Colorize;
use waypost::{Config, StaticLocation};

pub async fn execute(config: &Config, href: &str) -> Result<()> {
    let resolver = config.build_page_resolver();
    let location = StaticLocation::new(href);

    let view = resolver
        .get_page(&location)
        .await
        .with_context(|| format!("Failed to load page for {}", href))?;

    eprintln!("{} {}", "Page:".green().bold(), view.page.cyan());
    println!("{}", view.source);

    Ok(())
}
