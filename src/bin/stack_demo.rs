use std::env;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linear_collections::{ArrayStack, DemoConfig};

fn init_logging(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("linear_collections={}", default_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn load_config() -> Result<DemoConfig> {
    match env::args().nth(1) {
        Some(path) => DemoConfig::load(&path).with_context(|| format!("loading demo config from {}", path)),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;
    init_logging(&config.log_level);

    let mut stack: ArrayStack<i64> = config.items.iter().copied().collect();
    println!("stack: {} (size {})", stack, stack.size());
    println!("top:   {}", stack.top()?.to_string().green());

    while let Ok(item) = stack.pop() {
        println!("pop:   {}", item.to_string().green());
    }

    if let Err(e) = stack.top() {
        println!("top:   {}", e.to_string().yellow());
    }

    Ok(())
}
