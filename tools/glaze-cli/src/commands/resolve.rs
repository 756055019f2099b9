//! Resolve a panel layout to a window type.

use anyhow::Result;
use glaze_pricing::window::{self, layout_key, WindowType};
use serde_json::json;

use super::ResolveArgs;
use crate::context::Context;

/// Run the resolve command.
pub async fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let key = layout_key(args.panels, &args.partition);

    let window_type = match &args.default {
        Some(default) => {
            let default: WindowType = default.parse()?;
            let resolved = window::resolve_with_default(args.panels, &args.partition, default);
            if window::resolve_strict(args.panels, &args.partition).is_err() {
                ctx.output.warn(&format!("{} is not offered, using {}", key, resolved));
            }
            resolved
        }
        None => window::resolve_strict(args.panels, &args.partition)?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "layout": key,
            "windowType": window_type,
            "description": window_type.description(),
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "{} → {} ({})",
        key,
        window_type,
        window_type.description()
    ));
    let layouts = window::layouts_for(window_type);
    if !layouts.is_empty() {
        ctx.output.kv("layouts", &layouts.join(", "));
    }
    Ok(())
}
