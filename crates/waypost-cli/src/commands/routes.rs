use colored::Colorize;
use waypost::Config;

pub fn execute(config: &Config) {
    let router = config.build_router();

    if router.is_empty() {
        println!("{}", "No routes configured".yellow());
        return;
    }

    println!("{}", "Routes (matching order):".green().bold());
    for (position, route) in router.routes().iter().rev().enumerate() {
        let names = if route.param_names().is_empty() {
            String::new()
        } else {
            format!(" [{}]", route.param_names().join(", "))
        };
        println!(
            "  {:>3}. {} -> {}{}",
            position + 1,
            route.pattern(),
            route.handler().cyan(),
            names
        );
    }

    if let Some(not_found) = router.not_found() {
        println!("  fallback -> {}", not_found.cyan());
    }
}
