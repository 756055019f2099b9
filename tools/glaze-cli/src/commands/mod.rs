//! CLI command implementations.

pub mod cart;
pub mod pricing;
pub mod quote;
pub mod resolve;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use glaze_pricing::prelude::*;

/// Window choice shared by `quote` and `cart add`.
#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Height in millimetres.
    #[arg(long)]
    pub height: u32,

    /// Width in millimetres.
    #[arg(long)]
    pub width: u32,

    /// Window type key (e.g. type4).
    #[arg(long = "type", conflicts_with_all = ["panels", "partition"])]
    pub window_type: Option<String>,

    /// Number of panels.
    #[arg(long, requires = "partition")]
    pub panels: Option<u8>,

    /// Partition style (e.g. noPartition, fixedTop).
    #[arg(long, requires = "panels")]
    pub partition: Option<String>,

    /// Glass type.
    #[arg(long, default_value = "clear")]
    pub glass: String,

    /// Glass thickness.
    #[arg(long, default_value = "6mm")]
    pub thickness: String,

    /// Profile colour.
    #[arg(long, default_value = "white")]
    pub colour: String,
}

impl WindowArgs {
    /// Build the window spec these arguments describe.
    pub fn to_spec(&self) -> Result<WindowSpec> {
        let measurements = Measurements::new(self.height, self.width);
        let glass_type: GlassType = self.glass.parse()?;
        let thickness: GlassThickness = self.thickness.parse()?;
        let colour: ProfileColour = self.colour.parse()?;

        let spec = match (&self.window_type, self.panels, &self.partition) {
            (Some(key), _, _) => {
                WindowSpec::new(key.parse()?, measurements, glass_type, thickness, colour)
            }
            (None, Some(panels), Some(partition)) => WindowSpec::with_layout(
                panels,
                partition.as_str(),
                measurements,
                glass_type,
                thickness,
                colour,
            ),
            _ => bail!("Either --type or --panels with --partition is required"),
        };
        Ok(spec)
    }
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Number of panels.
    #[arg(long)]
    pub panels: u8,

    /// Partition style.
    #[arg(long)]
    pub partition: String,

    /// Type used when the layout is not offered.
    #[arg(long)]
    pub default: Option<String>,
}

/// Arguments for the pricing command.
#[derive(Args)]
pub struct PricingArgs {
    #[command(subcommand)]
    pub command: PricingCommand,
}

#[derive(Subcommand)]
pub enum PricingCommand {
    /// Show the active price table.
    Show,
    /// Apply a profile colour's prices.
    Profile {
        /// Profile colour (e.g. white, champagne).
        colour: String,
    },
    /// Apply a glass price.
    Glass {
        /// Glass type (e.g. clear, tinted).
        glass_type: String,
        /// Glass thickness (e.g. 6mm, 4+4mmLam).
        thickness: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Cart ID. `add` starts a new cart when omitted.
    #[arg(long, global = true)]
    pub cart: Option<String>,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show a cart's items and totals.
    Show,
    /// Price a window and add it to the cart.
    Add {
        #[command(flatten)]
        window: WindowArgs,

        /// Number of units.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove an item.
    Remove {
        /// Line item ID.
        item: String,
    },
    /// Set an item's quantity. Below one removes it.
    Quantity {
        /// Line item ID.
        item: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every item.
    Clear,
    /// Copy the cart into a new persistent cart.
    Save,
}
