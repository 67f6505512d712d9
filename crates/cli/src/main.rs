//! Loyalty console CLI - inspect the built-in directory and role tables.
//!
//! # Usage
//!
//! ```bash
//! # List every console account
//! loyalty-cli accounts
//!
//! # List one brand's staff
//! loyalty-cli accounts --brand kasa
//!
//! # Print the sidebar a waiter sees
//! loyalty-cli nav --role waiter
//!
//! # Print order, customer and campaign stats for a manager at Mawimbi
//! loyalty-cli summary --role manager --brand mawimbi
//! ```
//!
//! # Commands
//!
//! - `accounts` - List the account directory
//! - `nav` - Print the navigation table for a role
//! - `summary` - Print brand-scoped stats as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use loyalty_core::{Brand, Role};

mod commands;

#[derive(Parser)]
#[command(name = "loyalty-cli")]
#[command(author, version, about = "Loyalty console CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the account directory
    Accounts {
        /// Only accounts attached to this brand (`amka`, `mawimbi`, `kasa`)
        #[arg(short, long)]
        brand: Option<Brand>,
    },
    /// Print the navigation table for a role
    Nav {
        /// Role (`super_admin`, `admin`, `manager`, `waiter`)
        #[arg(short, long)]
        role: Role,
    },
    /// Print order, customer and campaign stats for a role and brand
    Summary {
        /// Role (`super_admin`, `admin`, `manager`, `waiter`)
        #[arg(short, long)]
        role: Role,

        /// Active brand
        #[arg(short, long, default_value_t = Brand::DEFAULT)]
        brand: Brand,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Accounts { brand } => commands::accounts::list(brand)?,
        Commands::Nav { role } => commands::nav::print(role)?,
        Commands::Summary { role, brand } => commands::summary::print(role, brand)?,
    }
    Ok(())
}
