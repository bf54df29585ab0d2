use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use salesbook_cli::{AppState, load_app_config, render};

#[derive(Debug, Parser)]
#[command(name = "salesbook")]
#[command(about = "Log sales and manage shipping locations")]
struct Cli {
    /// Storage directory.
    #[arg(long, global = true, env = "SALESBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    view: Option<View>,
}

#[derive(Debug, Subcommand)]
enum View {
    /// Totals and sales history.
    Dashboard(DashboardArgs),
    /// Log a new sale.
    AddSale(AddSaleArgs),
    /// Manage shipping locations.
    Locations {
        #[command(subcommand)]
        action: Option<LocationAction>,
    },
}

#[derive(Debug, Args)]
struct DashboardArgs {
    /// Print the dashboard as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    action: Option<DashboardAction>,
}

#[derive(Debug, Subcommand)]
enum DashboardAction {
    /// Delete one sale record.
    Remove {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every sale record.
    Clear {
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct AddSaleArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    #[arg(long, default_value = "1")]
    quantity: String,
    /// Shipping location id.
    #[arg(long)]
    location: Option<String>,
}

#[derive(Debug, Subcommand)]
enum LocationAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
    },
    Remove {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse first so --help and usage errors never depend on the environment.
    let cli = Cli::parse();

    let mut config = load_app_config().context("failed to load configuration")?;
    salesbook_observability::init(config.log_format);

    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = ?config.data_dir, "opening stores");

    let mut app = AppState::open_dir(&config.data_dir)?;

    match cli.view.unwrap_or(View::Dashboard(DashboardArgs {
        json: false,
        action: None,
    })) {
        View::Dashboard(args) => match args.action {
            None => {
                let view = app.dashboard();
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                } else {
                    print!("{}", render::dashboard(&view));
                }
            }
            Some(DashboardAction::Remove { id, yes }) => {
                if confirm(yes, "Delete this sale record?")? {
                    if app.remove_sale(&id)? {
                        println!("Removed sale {id}");
                    } else {
                        println!("No sale with id {id}");
                    }
                }
            }
            Some(DashboardAction::Clear { yes }) => {
                if confirm(yes, "Delete ALL sale records? This cannot be undone.")? {
                    app.clear_sales();
                    println!("All sales cleared");
                }
            }
        },
        View::AddSale(args) => {
            let record =
                app.add_sale(&args.name, &args.price, &args.quantity, args.location.as_deref())?;
            println!(
                "Logged {} x{} = {}  ({})",
                record.name(),
                record.quantity(),
                render::amount(salesbook_reporting::line_total(&record)),
                record.id_typed(),
            );
        }
        View::Locations { action } => match action.unwrap_or(LocationAction::List) {
            LocationAction::List => print!("{}", render::locations(app.locations.list())),
            LocationAction::Add { name, address } => {
                let loc = app.add_location(&name, &address)?;
                println!("Added location {} ({})", loc.name(), loc.id_typed());
            }
            LocationAction::Remove { id, yes } => {
                let prompt = "Delete this location? Sales that used it will show no location.";
                if confirm(yes, prompt)? {
                    if app.remove_location(&id)? {
                        println!("Removed location {id}");
                    } else {
                        println!("No location with id {id}");
                    }
                }
            }
        },
    }

    Ok(())
}

/// Ask before a destructive action unless `--yes` was passed.
fn confirm(yes: bool, prompt: &str) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("confirmation prompt failed (pass --yes when not running in a terminal)")?;
    if !confirmed {
        println!("Cancelled");
    }
    Ok(confirmed)
}
