use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "resto-pos")]
#[command(about = "Restaurant point-of-sale demo: menu, orders, tables, customers")]
pub struct CliConfig {
    /// TOML menu file; the built-in sample menu is used when omitted
    #[arg(long)]
    pub menu_path: Option<String>,

    #[arg(long, default_value = "10")]
    pub table_count: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("table_count", self.table_count, 1)
    }
}
