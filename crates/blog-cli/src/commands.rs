use std::path::Path;

use anyhow::{anyhow, Context};
use colored::Colorize;
use tracing::Level;

use blog_sdk::Blog;
use blog_server::{BlogServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let level = log_level(&config, cli.verbose)?;
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Command::Serve(args) => cmd_serve(apply_overrides(config, &args)),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = args.seed {
        config.seed_posts = seed;
    }
    config
}

fn log_level(config: &ServerConfig, verbose: bool) -> anyhow::Result<Level> {
    if verbose {
        return Ok(Level::DEBUG);
    }
    config
        .log_level
        .parse()
        .map_err(|_| anyhow!("invalid log_level: {}", config.log_level))
}

fn cmd_serve(config: ServerConfig) -> anyhow::Result<()> {
    println!(
        "{} Blog API on {} ({} demo posts)",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.seed_posts.to_string().cyan()
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(BlogServer::new(config, Blog::in_memory()).serve())?;
    Ok(())
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
