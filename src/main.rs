//! Operator command line for the point-of-sale data directory.

mod cli;

use clap::Parser;
use cli::{Cli, Command, StoreName};
use freshmade_pos_lib::commands::reports;
use freshmade_pos_lib::models::OrderStatus;
use freshmade_pos_lib::money::{display_customer, format_amount};
use freshmade_pos_lib::{logger, AppConfig, AppState, StoreError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(dir) = args.data_dir.clone() {
        config.data_dir = dir;
    }

    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    let log_dir = config.log_to_file.then(|| config.log_dir());
    let _guard = logger::init_logging(level, log_dir.as_deref())?;

    tracing::info!(data_dir = %config.data_dir.display(), "Starting freshmade-pos");

    let state = AppState::open(&config)?;
    execute(&state, args.command)?;

    Ok(())
}

fn execute(state: &AppState, command: Command) -> Result<(), StoreError> {
    match command {
        Command::Summary => {
            let summary = reports::dashboard(state.catalog()?, state.employees()?);
            let payroll = state.employees()?.salary_stats();

            println!("Orders:            {}", summary.orders.total_orders);
            println!("  pending:         {}", summary.orders.pending_orders);
            println!("  completed:       {}", summary.orders.completed_orders);
            println!("Revenue:           {}", format_amount(summary.orders.total_revenue));
            println!("Salary paid:       {}", format_amount(summary.salary_payments));
            println!("Net profit:        {}", format_amount(summary.net_profit));
            println!("Monthly payroll:   {}", format_amount(payroll.monthly_salary_expense));
            println!(
                "Employees:         {} active of {}",
                summary.active_employees, payroll.total_employees
            );
            println!(
                "Menu:              {} available of {}",
                summary.menu.available_items, summary.menu.total_items
            );
        }
        Command::Menu { category } => {
            let catalog = state.catalog()?;
            let items = match category.as_deref() {
                Some(category) => catalog.menu_items_in_category(category),
                None => catalog.menu_items().iter().collect(),
            };
            for item in items {
                let flag = if item.available { "" } else { " (unavailable)" };
                println!(
                    "{:>14}  {:<16} {:<48} {}{}",
                    item.id,
                    item.category,
                    item.name,
                    format_amount(item.price),
                    flag
                );
            }
        }
        Command::Orders { status, search } => {
            let status = match status.as_deref() {
                None | Some("all") => None,
                Some(value) => match OrderStatus::parse(value) {
                    Some(status) => Some(status),
                    None => {
                        return Err(StoreError::Config(format!("Unknown order status: {}", value)))
                    }
                },
            };

            let catalog = state.catalog()?;
            for order in catalog.filter_orders(&search, status) {
                println!(
                    "#{}  {:<24} {:<10} {:>14}  {}",
                    order.id,
                    display_customer(order.customer_name.as_deref()),
                    order.status.as_str(),
                    format_amount(order.total_amount),
                    order.created_at
                );
            }
        }
        Command::Export { store } => {
            let json = match store {
                StoreName::Catalog => state.catalog()?.to_json_pretty()?,
                StoreName::Employees => state.employees()?.to_json_pretty()?,
            };
            println!("{}", json);
        }
        Command::Reset { store } => {
            match store {
                StoreName::Catalog => state.catalog()?.clear_persisted()?,
                StoreName::Employees => state.employees()?.clear_persisted()?,
            }
            tracing::warn!(?store, "Persisted data removed; seed data applies on next start");
        }
    }

    Ok(())
}
