use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "freshmade-pos")]
#[command(about = "Inspect and maintain the point-of-sale stores")]
#[command(version)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(long, short = 'c', value_name = "PATH", default_value = "freshmade-pos.json")]
    pub config: PathBuf,

    /// Data directory, overriding the configuration file
    #[arg(long, env = "FRESHMADE_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dashboard figures: orders, revenue, payroll
    Summary,
    /// List menu items, optionally for one category
    Menu {
        #[arg(long)]
        category: Option<String>,
    },
    /// List orders, optionally filtered by status
    Orders {
        #[arg(long)]
        status: Option<String>,
        /// Match customer name, phone or order id
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print a store's persisted document
    Export { store: StoreName },
    /// Remove a store's persisted document so the seed data returns
    Reset { store: StoreName },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StoreName {
    Catalog,
    Employees,
}
