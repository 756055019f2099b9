//! Cart commands.

use anyhow::{Context as _, Result};
use glaze_cart::prelude::*;
use glaze_pricing::breakdown::ComponentGroup;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::money;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let services = ctx.services().await?;
    let carts = &services.carts;

    let view = match args.command {
        CartCommand::Add { window, quantity } => {
            let cart_id = match args.cart {
                Some(id) => CartId::new(id),
                None => {
                    let id = CartId::generate();
                    ctx.output.info(&format!("Started cart {}", id));
                    id
                }
            };
            let spec = window.to_spec()?.quantity(quantity);
            carts.add(&cart_id, &spec).await?
        }
        CartCommand::Show => carts.get_cart(&required(args.cart)?).await?,
        CartCommand::Remove { item } => {
            carts
                .remove(&required(args.cart)?, &LineItemId::new(item))
                .await?
        }
        CartCommand::Quantity { item, quantity } => {
            carts
                .update_quantity(&required(args.cart)?, &LineItemId::new(item), quantity)
                .await?
        }
        CartCommand::Clear => {
            let view = carts.clear(&required(args.cart)?).await?;
            ctx.output.success("Cart cleared");
            view
        }
        CartCommand::Save => {
            let session = required(args.cart)?;
            let saved = carts.save_session_cart(&session).await?;
            ctx.output.success(&format!("Saved {} as {}", session, saved));
            carts.get_cart(&saved).await?
        }
    };

    print_cart(&view, ctx)
}

fn required(cart: Option<String>) -> Result<CartId> {
    cart.map(CartId::new).context("--cart is required")
}

fn print_cart(view: &CartView, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(view);
        return Ok(());
    }

    ctx.output.header(&format!("Cart {}", view.cart_id));
    if view.items.is_empty() {
        ctx.output.info("No items");
        return Ok(());
    }

    let widths = [30, 8, 12, 5, 12, 12];
    ctx.output.table_header(
        &["ITEM", "TYPE", "SIZE", "QTY", "UNIT PRICE", "LINE TOTAL"],
        &widths,
    );
    for item in &view.items {
        let size = format!("{}x{}", item.measurements.height, item.measurements.width);
        let line_total = item.line_total()?;
        ctx.output.table_row(
            &[
                item.id.as_str(),
                item.window_type.as_str(),
                &size,
                &item.quantity.to_string(),
                &item.unit_price.display(),
                &line_total.display(),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    for group in ComponentGroup::ALL {
        let amount = view.totals.group(group);
        if !amount.is_zero() {
            ctx.output.kv(group.as_str(), &amount.display());
        }
    }
    ctx.output.kv("items", &view.totals.total_items.to_string());
    ctx.output.kv("total", &money(view.totals.grand_total));
    Ok(())
}
