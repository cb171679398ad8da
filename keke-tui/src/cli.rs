use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "keke-tui")]
#[command(about = "Terminal UI for Keck ToO observation requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the observatory API (default)
    Run,
    /// Authenticate with the observatory and save the session
    Login,
    /// Remove the saved session
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
