use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blog", about = "Blog post content API", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at DEBUG regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Insert this many generated posts before serving
    #[arg(long)]
    pub seed: Option<usize>,
}
