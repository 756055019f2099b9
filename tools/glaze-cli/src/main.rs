//! Glaze CLI - Quote aluminium windows and manage carts.
//!
//! Commands:
//! - `glaze quote` - Price a single window
//! - `glaze resolve` - Map a panel layout to a window type
//! - `glaze pricing` - Show or update the price table
//! - `glaze cart` - Add, change and save cart items

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, PricingArgs, QuoteArgs, ResolveArgs};

/// Glaze CLI - Quote aluminium windows and manage carts
#[derive(Parser)]
#[command(name = "glaze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single window
    Quote(QuoteArgs),

    /// Resolve a panel layout to a window type
    Resolve(ResolveArgs),

    /// Show or update the price table
    Pricing(PricingArgs),

    /// Manage a cart
    Cart(CartArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Err(e) = ctx.init_logging() {
        ctx.output.warn(&format!("{:#}", e));
    }

    // Execute command
    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Resolve(args) => commands::resolve::run(args, &ctx).await,
        Commands::Pricing(args) => commands::pricing::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "command failed");
        let message = if ctx.environment.is_production() {
            ctx.environment.public_message(&*e)
        } else {
            format!("{:#}", e)
        };
        ctx.output.error(&message);
        std::process::exit(1);
    }

    Ok(())
}
