mod app;
mod bootstrap;
mod cli;
mod config;
mod login;
mod runtime;
mod ui;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keck::{Credentials, KeckClient, KeckURL};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use app::App;
use cli::{Cli, Commands};
use config::KekeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::Login => {
            let cfg = KekeConfig::load()?;
            login::run_login(&cfg.api_url).await?;
            Ok(())
        }
        Commands::Logout => {
            KekeConfig::clear_session()?;
            println!("Session removed.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = KekeConfig::config_path()?;
            if !path.exists() {
                KekeConfig::default().save()?;
                println!("Created default config.");
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run() -> Result<()> {
    let cfg = KekeConfig::load()?;

    let Some(uid) = KekeConfig::load_session()? else {
        bail!("Not logged in. Run `keke-tui login` first.");
    };

    let credentials = Credentials::from_uid(uid);
    let client = KeckClient::with_base(KeckURL::new(&cfg.api_url), credentials);

    let observer = client
        .fetch_userinfo()
        .await
        .context("Session expired or invalid. Run `keke-tui login` to re-authenticate.")?;
    println!("Logged in as {} (#{}).", observer.full_name(), observer.id);

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(observer, today);

    bootstrap::initialize_app_state(&mut app, &client).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
