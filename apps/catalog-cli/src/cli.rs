//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catalog", author, version, about = "Edit a local product catalog")]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the catalog data; overrides config and environment.
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List products, optionally filtered by a search term.
    List(ListArgs),

    /// Show every field of one product.
    Show {
        /// Product id.
        id: String,
    },

    /// Add a product.
    Add(AddArgs),

    /// Change some fields of a product; others are kept.
    Update(UpdateArgs),

    /// Delete a product.
    Delete(DeleteArgs),

    /// Print stock statistics.
    Stats,

    /// Write the catalog to products-YYYY-MM-DD.json.
    Export(ExportArgs),

    /// Print the effective configuration.
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive match on name, description or category.
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub price: f64,

    #[arg(long)]
    pub quantity: u32,

    #[arg(long, default_value = "")]
    pub description: String,

    /// electronics, clothing, home, sport, other, or any custom value.
    #[arg(long, default_value = "other")]
    pub category: String,

    /// Mark the product as not available.
    #[arg(long)]
    pub unavailable: bool,

    /// Image as a data URL (data:image/...;base64,...), at most 2 MiB.
    #[arg(long, value_name = "DATA_URL")]
    pub image_data: Option<String>,

    /// Use this id instead of a generated one.
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Product id.
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub quantity: Option<u32>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub available: Option<bool>,

    /// Replace the image with this data URL.
    #[arg(long, value_name = "DATA_URL", conflicts_with = "clear_image")]
    pub image_data: Option<String>,

    /// Remove the image.
    #[arg(long)]
    pub clear_image: bool,
}

#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Product id.
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also write it to the config file.
    #[arg(long)]
    pub write: bool,
}
