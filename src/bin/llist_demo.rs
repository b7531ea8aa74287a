use std::env;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linear_collections::{DemoConfig, LinkedSequence};

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

    let mut sequence = LinkedSequence::from(config.items.clone());
    println!("{}", "Tests of functions: max, min, index, count, and remove".bold());
    println!("\t{}\n", sequence);

    match sequence.max() {
        Ok(max) => println!("\tmax:    {}", max.to_string().green()),
        Err(e) => println!("\tmax:    {}", e.to_string().red()),
    }
    match sequence.min() {
        Ok(min) => println!("\tmin:    {}", min.to_string().green()),
        Err(e) => println!("\tmin:    {}", e.to_string().red()),
    }
    match sequence.index_of(&config.probe) {
        Some(position) => println!("\tindex_of({}): {}", config.probe, position.to_string().green()),
        None => println!("\tindex_of({}): {}", config.probe, "not found".yellow()),
    }
    println!(
        "\tcount_occurrences({}): {}",
        config.remove,
        sequence.count_occurrences(&config.remove).to_string().green()
    );

    let removed = sequence.remove_first(&config.remove);
    println!(
        "\tremove_first({}): {}",
        config.remove,
        if removed.is_some() { "removed".green() } else { "absent".yellow() }
    );
    println!("\tafter:  {}", sequence);

    let json = serde_json::to_string(&sequence).context("serializing sequence")?;
    println!("\tjson:   {}", json);

    Ok(())
}
