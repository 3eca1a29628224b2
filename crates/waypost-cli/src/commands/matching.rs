use anyhow::{Context, Result};
use colored::Colorize;
use waypost::{strip_base_path, Config};

pub fn execute(config: &Config, path: &str) -> Result<()> {
    let router = config.build_router();
    let relative = strip_base_path(path, router.base_path());

    let route_match = router
        .match_path(relative)
        .with_context(|| format!("Failed to match path: {}", path))?;

    match (route_match.pattern, route_match.handler) {
        (Some(pattern), Some(handler)) => {
            println!("{} {} -> {}", "✓".green().bold(), relative, handler.cyan());
            println!("  pattern: {}", pattern);
        }
        (_, Some(handler)) => {
            println!("{} {} -> {} (fallback)", "⚠".yellow(), relative, handler.cyan());
        }
        (_, None) => {
            println!("{} {} matched no route and no fallback is set", "✗".red(), relative);
        }
    }

    let mut params: Vec<_> = route_match.params.iter().collect();
    params.sort();
    for (name, value) in params {
        println!("  {} = {}", name.bold(), value);
    }

    Ok(())
}
