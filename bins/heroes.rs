use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use app::{App, Page, Route};
use clap::{Parser, Subcommand};
use configs::AppConfig;
use models::{Hero, HeroId};
use service::{HeroService, MessageService};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "heroes")]
#[command(about = "Browse and edit heroes on a heroes REST backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to $CONFIG_PATH or config.toml).
    #[arg(short, long)]
    config: Option<String>,
    /// Backend base URL, overrides config and HEROES_API_URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Emit JSON logs on stderr.
    #[arg(long)]
    json_logs: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the featured heroes.
    Dashboard,
    /// List all heroes.
    List,
    /// Show one hero.
    Show { id: HeroId },
    /// Add a hero by name.
    Add { name: String },
    /// Rename a hero and save it.
    Rename { id: HeroId, name: String },
    /// Delete a hero.
    Delete { id: HeroId },
    /// Search heroes by name.
    Search { term: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cli.json_logs || cfg.logging.json);
    info!(event = "start", heroes_url = %cfg.api.heroes_url(), version = env!("CARGO_PKG_VERSION"));

    match run(cli.command, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(event = "run_failed", error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = cli.config.clone().unwrap_or_else(configs::config_path);
    AppConfig::load_or_default(&path, cli.base_url.clone()).with_context(|| format!("loading {path}"))
}

async fn run(command: Commands, cfg: &AppConfig) -> anyhow::Result<()> {
    let messages = MessageService::new();
    let svc = HeroService::new(&cfg.api, messages.clone())?;
    let mut app = App::new(Arc::new(svc), messages);

    match command {
        Commands::Dashboard => {
            app.navigate("/dashboard").await;
            print_page(&app);
        }
        Commands::List => {
            app.navigate("/heroes").await;
            print_page(&app);
        }
        Commands::Show { id } => {
            app.navigate(&Route::detail_url(id)).await;
            print_page(&app);
        }
        Commands::Add { name } => {
            app.navigate("/heroes").await;
            if let Some(heroes) = app.heroes_mut() {
                heroes.add(&name).await;
            }
            print_page(&app);
        }
        Commands::Rename { id, name } => {
            app.navigate("/heroes").await;
            app.navigate(&Route::detail_url(id)).await;
            let mut nav = None;
            if let Some(detail) = app.detail_mut() {
                if detail.rename(&name) {
                    nav = Some(detail.save().await);
                }
            }
            match nav {
                Some(nav) => {
                    app.apply(nav).await;
                }
                None => println!("no hero with id {id}"),
            }
            print_page(&app);
        }
        Commands::Delete { id } => {
            app.navigate("/heroes").await;
            let pending = app.heroes_mut().and_then(|heroes| {
                let hero = heroes.heroes()?.iter().find(|h| h.id == id).cloned()?;
                Some(heroes.delete(&hero))
            });
            match pending {
                // wait so the request is not cut off when the process exits
                Some(handle) => {
                    handle.await?;
                }
                None => println!("no hero with id {id}"),
            }
            print_page(&app);
        }
        Commands::Search { term } => {
            app.search_mut().search(&term).await;
            print_heroes(app.search_mut().results());
        }
    }

    println!();
    println!("Messages");
    for line in app.messages().messages() {
        println!("  {line}");
    }
    Ok(())
}

fn print_page(app: &App) {
    match app.page() {
        Some(Page::Dashboard(view)) => {
            println!("Top Heroes");
            print_heroes(view.heroes());
        }
        Some(Page::Heroes(view)) => {
            println!("My Heroes");
            print_heroes(view.heroes().unwrap_or_default());
        }
        Some(Page::HeroDetail(view)) => match view.hero() {
            Some(hero) => println!("{} Details\n  id: {}\n  name: {}", hero.name.to_uppercase(), hero.id, hero.name),
            None => println!("(no hero)"),
        },
        None => println!("(nothing to show)"),
    }
}

fn print_heroes(heroes: &[Hero]) {
    if heroes.is_empty() {
        println!("  (none)");
    }
    for hero in heroes {
        println!("  {:>4}  {}", hero.id, hero.name);
    }
}
