//! Pricing configuration commands.

use anyhow::{Context as _, Result};
use glaze_pricing::config::PriceTable;
use serde_json::json;

use super::{PricingArgs, PricingCommand};
use crate::context::{Context, Services};

/// Run the pricing command.
pub async fn run(args: PricingArgs, ctx: &Context) -> Result<()> {
    let services = ctx.services().await?;

    match args.command {
        PricingCommand::Show => show(&services, ctx),
        PricingCommand::Profile { colour } => profile(&colour, &services, ctx).await,
        PricingCommand::Glass {
            glass_type,
            thickness,
        } => glass(&glass_type, &thickness, &services, ctx).await,
    }
}

fn show(services: &Services, ctx: &Context) -> Result<()> {
    let table = services.engine.pricing().snapshot();

    if ctx.output.is_json() {
        ctx.output.json(&*table);
        return Ok(());
    }

    print_table_summary(&table, ctx);

    let prices = serde_json::to_value(&table.prices).context("Failed to encode unit prices")?;
    if let Some(prices) = prices.as_object() {
        ctx.output.info("");
        let widths = [24, 12];
        ctx.output.table_header(&["COMPONENT", "UNIT PRICE"], &widths);
        for (name, price) in prices {
            let price = match price.as_str() {
                Some(s) => s.to_string(),
                None => price.to_string(),
            };
            ctx.output.table_row(&[name.as_str(), price.as_str()], &widths);
        }
    }
    Ok(())
}

async fn profile(colour: &str, services: &Services, ctx: &Context) -> Result<()> {
    let table = services.engine.update_profile_config(colour).await?;

    if ctx.output.is_json() {
        ctx.output.json(&*table);
        return Ok(());
    }

    ctx.output.success(&format!("Applied {} profile prices", colour));
    print_table_summary(&table, ctx);
    Ok(())
}

async fn glass(glass_type: &str, thickness: &str, services: &Services, ctx: &Context) -> Result<()> {
    let price = services
        .engine
        .update_glass_config(glass_type, thickness)
        .await?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "glassType": glass_type,
            "glassThickness": thickness,
            "pricePerSquareMetre": price,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Glass price for {} {} is now {} per m²",
        glass_type, thickness, price
    ));
    Ok(())
}

fn print_table_summary(table: &PriceTable, ctx: &Context) {
    ctx.output.header("Price Table");
    ctx.output.kv("version", &table.version.to_string());
    ctx.output.kv(
        "profile colour",
        table.profile_colour.map(|c| c.as_str()).unwrap_or("default"),
    );
    let glass = table
        .glass
        .map(|g| format!("{} {}", g.glass_type, g.thickness))
        .unwrap_or_else(|| "default".to_string());
    ctx.output.kv("glass", &glass);
}
