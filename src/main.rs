//! restaurant-dash: command-line front end for the dashboard store.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;

use restaurant_dash_lib::ai::{Analyzer, GeminiGateway};
use restaurant_dash_lib::commands::{
    actions, analysis, history, ingredients, invoices, menu, reservations, sales,
};
use restaurant_dash_lib::config::Config;
use restaurant_dash_lib::logger;
use restaurant_dash_lib::models::DateRange;
use restaurant_dash_lib::App;

/// Restaurant operations dashboard
#[derive(Parser)]
#[command(name = "restaurant-dash")]
#[command(version)]
struct Cli {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Period {
    /// First day of the period (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<String>,

    /// Last day of the period (YYYY-MM-DD), defaults to today
    #[arg(long)]
    end: Option<String>,
}

impl Period {
    fn range(&self) -> DateRange {
        let today = Local::now().format("%Y-%m-%d").to_string();
        DateRange::new(
            self.start.clone().unwrap_or_else(|| today.clone()),
            self.end.clone().unwrap_or(today),
        )
    }
}

#[derive(Subcommand)]
enum Command {
    /// Revenue, cost, margin and best sellers for a period
    Stats(Period),

    /// Ask the AI for alerts and actions on a period and keep the result
    Analyze(Period),

    /// Past analyses
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Run a quick action from a stored analysis; a price update is then removed from it
    ApplyAction {
        /// Analysis id
        id: String,
        /// Position of the action in that analysis
        index: usize,
    },

    /// Read a supplier invoice image
    ScanInvoice {
        image: PathBuf,

        /// Merge the parsed lines into the ingredient list
        #[arg(long)]
        apply: bool,
    },

    /// List ingredients
    Ingredients,

    /// List menu items
    Menu,

    /// List reservations
    Reservations,

    /// List sales
    Sales,
}

#[derive(Subcommand)]
enum HistoryCommand {
    List,
    Delete { id: String },
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn analyzer(config: &Config) -> color_eyre::Result<Analyzer> {
    let gateway = GeminiGateway::from_config(&config.ai)?;
    Ok(Analyzer::new(Arc::new(gateway)))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load()?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    logger::init_logger(level, config.logging.dir.as_deref());

    let mut app = App::open(config)?;

    match cli.command {
        Command::Stats(period) => {
            let range = period.range();
            print_json(&app.dashboard(&range).rounded())?;
        }
        Command::Analyze(period) => {
            let range = period.range();
            let analyzer = analyzer(&app.config)?;
            let top = app.config.dashboard.top_n;
            let item = analysis::run_analysis(&mut app.store, &analyzer, &range, top).await?;
            print_json(&item)?;
        }
        Command::History { command } => match command {
            HistoryCommand::List => print_json(&history::get_history(&app.store))?,
            HistoryCommand::Delete { id } => {
                history::delete_history_item(&mut app.store, &id)?;
                println!("Deleted {id}");
            }
        },
        Command::ApplyAction { id, index } => {
            let outcome = actions::execute_stored_action(&mut app.store, &id, index)?;
            print_json(&outcome)?;
        }
        Command::ScanInvoice { image, apply } => {
            let bytes = std::fs::read(&image)?;
            let mime = mime_guess::from_path(&image).first_or_octet_stream();
            let analyzer = analyzer(&app.config)?;
            let invoice = invoices::scan_invoice(analyzer.gateway(), &bytes, mime.as_ref()).await?;
            print_json(&invoice)?;
            if apply {
                let outcome = invoices::apply_invoice(&mut app.store, &invoice)?;
                print_json(&outcome)?;
            }
        }
        Command::Ingredients => print_json(&ingredients::get_ingredients(&app.store))?,
        Command::Menu => print_json(&menu::get_menu(&app.store))?,
        Command::Reservations => print_json(&reservations::get_reservations(&app.store))?,
        Command::Sales => print_json(&sales::get_sales(&app.store))?,
    }

    Ok(())
}
