//! Quote a single window.

use anyhow::Result;
use glaze_pricing::breakdown::CostBreakdown;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::money;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let spec = args.window.to_spec()?;
    let services = ctx.services().await?;

    let breakdown = services.engine.calculate(&spec)?;
    let materialized = breakdown.materialize()?;

    if ctx.output.is_json() {
        ctx.output.json(&materialized);
        return Ok(());
    }

    print_breakdown(ctx, &breakdown)?;
    Ok(())
}

fn print_breakdown(ctx: &Context, breakdown: &CostBreakdown) -> Result<()> {
    let window_type = breakdown.window_type();
    let measurements = breakdown.measurements();

    ctx.output.header(&format!(
        "{} ({})",
        window_type,
        window_type.description()
    ));
    ctx.output.kv(
        "size",
        &format!("{} x {} mm", measurements.height, measurements.width),
    );
    ctx.output.kv("price table", &format!("v{}", breakdown.price_version()));
    ctx.output.info("");

    let widths = [22, 12, 10, 12];
    ctx.output.table_header(&["COMPONENT", "QUANTITY", "RATE", "COST"], &widths);
    for line in breakdown.lines() {
        let quantity = format!(
            "{} {}",
            line.quantity.normalize(),
            line.component.unit().symbol()
        );
        ctx.output.table_row(
            &[
                line.component.as_str(),
                &quantity,
                &line.unit_price.normalize().to_string(),
                &line.cost.display(),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("subtotal", &money(breakdown.subtotal()?));
    ctx.output.kv("installation", &money(breakdown.installation_cost()?));
    ctx.output.kv("total", &money(breakdown.total_cost()?));
    Ok(())
}
