//! Command line: the interactive UI by default, plus one-shot commands that
//! drive the same services without a terminal UI.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::services::{PartsQuery, Services, SortBy, SortOrder};
use crate::session::Credentials;
use crate::ui::format::format_price;

#[derive(Debug, Parser)]
#[command(name = "partorder")]
#[command(about = "Order vehicle parts from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override where the session is stored
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `partorder=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Notify the backend and clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List parts
    Parts {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// name, price or part-number
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        desc: bool,
    },
    /// Show the cart
    Cart,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("Failed to load configuration")?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(path) = &self.session_file {
            config.session.path = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn parse_sort(value: &str) -> anyhow::Result<SortBy> {
    match value {
        "name" => Ok(SortBy::Name),
        "price" => Ok(SortBy::Price),
        "part-number" | "part_number" => Ok(SortBy::PartNumber),
        other => Err(anyhow!("Unknown sort field '{}'", other)),
    }
}

/// Run a one-shot command against `services`.
pub async fn run_command(command: Command, services: &Services, page_size: u32) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let user = services
                .auth
                .login(&Credentials::new(email, password))
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        Command::Logout => {
            services.auth.logout().await;
            println!("Logged out");
        }
        Command::Whoami => match services.auth.user_data() {
            Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
            None => println!("Not logged in"),
        },
        Command::Parts {
            search,
            page,
            limit,
            sort,
            desc,
        } => {
            let query = PartsQuery {
                page: Some(page),
                limit: Some(limit.unwrap_or(page_size)),
                search,
                category: None,
                sort_by: sort.as_deref().map(parse_sort).transpose()?,
                order: Some(if desc { SortOrder::Desc } else { SortOrder::Asc }),
            };
            let page = services
                .parts
                .list(&query)
                .await
                .into_data()
                .map_err(|err| anyhow!(err.message))?;
            for part in &page.items {
                println!(
                    "{:<18} {:<40} {:>14}",
                    part.part_number,
                    part.name,
                    format_price(part.price)
                );
            }
            if page.has_more() {
                println!("(more on page {})", query.page.unwrap_or(1) + 1);
            }
        }
        Command::Cart => {
            let cart = services
                .cart
                .get_cart()
                .await
                .into_data()
                .map_err(|err| anyhow!(err.message))?;
            let mut total = 0;
            for item in &cart.items {
                total += item.subtotal;
                println!(
                    "{:<40} {:>4} x {:>12} = {:>14}",
                    item.name,
                    item.quantity,
                    format_price(item.price),
                    format_price(item.subtotal)
                );
            }
            println!("Total: {}", format_price(total));
        }
    }
    Ok(())
}
