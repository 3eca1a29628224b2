use anyhow::{bail, Result};
use colored::Colorize;
use waypost::{Config, MenuItem};

pub fn execute(config: &Config, id: Option<&str>, json: bool) -> Result<()> {
    let router = config.build_router();

    let items: Vec<MenuItem> = match id {
        Some(id) => match router.menu(id) {
            Some(items) => items.to_vec(),
            None => {
                let known: Vec<&str> = router.menus().ids().collect();
                bail!("Unknown menu '{}' (configured: {})", id, known.join(", "));
            }
        },
        None => router.menu_items(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for item in items.iter().filter(|item| !item.hidden) {
        println!("  {} {}", item.label.bold(), item.url.dimmed());
    }

    Ok(())
}
