use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::core::destination::DestinationKind;
use crate::core::dispatcher::{InsertionDispatcher, InsertionOutcome, Notifier, TracingNotifier};
use crate::core::palette::Palette;
use crate::core::registry::SymbolRegistry;
use crate::core::workspace::Workspace;
use crate::symbols::*;
use crate::InsertArgs;

/// Works out which symbol an `insert` invocation refers to
pub fn resolve_symbol(palette: &Palette, args: &InsertArgs, config: &Config) -> Result<String> {
    if let Some(symbol) = &args.symbol {
        return Ok(symbol.clone());
    }

    let (Some(category), Some(index)) = (&args.from, args.index) else {
        return Err(anyhow!("Specify a symbol or both --from <CATEGORY> and --index <N>"));
    };

    let limit = config.get_palette_config().display_limit();
    palette
        .registry()
        .displayed_symbol(category, index, limit)
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow!(
                "No symbol at index {index} in category '{category}' ({} shown)",
                palette.displayed_symbols(category, limit).len()
            )
        })
}

/// Handles `insert`: load the workspace, dispatch once, save on success
pub async fn handle_insert_command(args: InsertArgs, config: &Config) -> Result<InsertionOutcome> {
    let mut notifier = TracingNotifier;
    handle_insert_with_notifier(args, config, &mut notifier).await
}

/// Same as [`handle_insert_command`] with a caller-supplied notifier
pub async fn handle_insert_with_notifier(
    args: InsertArgs,
    config: &Config,
    notifier: &mut dyn Notifier,
) -> Result<InsertionOutcome> {
    let palette = Palette::new(
        SymbolRegistry::builtin(),
        InsertionDispatcher::with_options(config.get_dispatch_options()),
    );
    let symbol = resolve_symbol(&palette, &args, config)?;

    let workspace_path = args
        .workspace
        .clone()
        .unwrap_or_else(|| config.get_workspace_file());
    let mut workspace = Workspace::load_from_file(&workspace_path)
        .await
        .with_context(|| format!("Cannot insert without a workspace ({})", workspace_path.display()))?;

    let target: Option<DestinationKind> = args.into.map(Into::into);
    debug!(
        "Inserting '{symbol}' into {}",
        target.unwrap_or(workspace.active_space)
    );

    let outcome = palette
        .insert_into_host(&mut workspace, target, &symbol, notifier)
        .context("Insertion failed")?;

    match &outcome {
        InsertionOutcome::Inserted {
            destination,
            target,
        } => {
            workspace.save_to_file(&workspace_path).await?;
            info!(
                "{SYMBOL_INDICATOR_SUCCESS} Inserted '{symbol}' into {} {destination} '{target}'",
                destination.icon()
            );
        }
        InsertionOutcome::Skipped(reason) => {
            debug!("Nothing inserted: {reason}");
        }
    }

    Ok(outcome)
}
