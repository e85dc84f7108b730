use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::palette::Palette;
use crate::core::registry::{display_slice, grid_rows};
use crate::symbols::*;

/// One row of `categories --json`
#[derive(Debug, Serialize)]
struct CategoryListing<'a> {
    key: &'a str,
    label: &'a str,
    count: usize,
}

/// Renders the category selector: key, label and symbol count per line
pub fn render_categories(palette: &Palette) -> String {
    let mut output = String::new();
    for category in palette.categories() {
        let count = palette.symbols(category.key()).len();
        output.push_str(&format!(
            "  {:<20} {SYMBOL_CONTENT_ARROW_RIGHT} {:<20} {count:>3} symbols\n",
            category.key(),
            category.label(),
        ));
    }
    output
}

/// Renders symbols as a grid with `columns` symbols per row
pub fn render_symbol_grid(symbols: &[&str], columns: usize) -> String {
    let mut output = String::new();
    for row in grid_rows(symbols, columns) {
        output.push_str("  ");
        output.push_str(&row.join("  "));
        output.push('\n');
    }
    output
}

/// Handles `categories`
pub fn handle_categories_command(palette: &Palette, json: bool) -> Result<()> {
    if json {
        let listing: Vec<CategoryListing> = palette
            .categories()
            .iter()
            .map(|category| CategoryListing {
                key: category.key(),
                label: category.label(),
                count: palette.symbols(category.key()).len(),
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&listing).context("Failed to render categories")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{SYMBOL_CATALOG_CATEGORY} Categories:");
    println!();
    print!("{}", render_categories(palette));
    Ok(())
}

/// Handles `symbols [CATEGORY]`
pub fn handle_symbols_command(
    palette: &Palette,
    category: Option<String>,
    limit: Option<usize>,
    columns: Option<usize>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let palette_config = config.get_palette_config();
    let category =
        category.unwrap_or_else(|| palette_config.default_category().key().to_string());
    let limit = limit.unwrap_or_else(|| palette_config.display_limit());
    let columns = columns.unwrap_or_else(|| palette_config.columns());

    let all = palette.symbols(&category);
    let shown = display_slice(all, limit);
    debug!(
        "Showing {} of {} symbols for '{category}'",
        shown.len(),
        all.len()
    );

    if json {
        let rendered = serde_json::to_string_pretty(shown).context("Failed to render symbols")?;
        println!("{rendered}");
        return Ok(());
    }

    if all.is_empty() {
        info!("{SYMBOL_INDICATOR_INFO} No symbols registered for category '{category}'");
        println!("Use `unicode-palette categories` to see available categories");
        return Ok(());
    }

    println!("{SYMBOL_CATALOG_PALETTE} {category}");
    println!();
    print!("{}", render_symbol_grid(shown, columns));
    if shown.len() < all.len() {
        println!();
        println!("  ({} of {} shown)", shown.len(), all.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_categories_lists_all_in_order() {
        let palette = Palette::default();
        let rendered = render_categories(&palette);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 25);
        assert!(lines[0].contains("Symbols"));
        assert!(lines[7].contains("Heart Symbols"));
        assert!(lines[24].contains("Other"));
    }

    #[test]
    fn test_render_symbol_grid_rows() {
        let rendered = render_symbol_grid(&["α", "β", "γ", "δ", "ε", "ζ", "η"], 5);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  α  β  γ  δ  ε");
        assert_eq!(lines[1], "  ζ  η");
    }

    #[test]
    fn test_render_symbol_grid_empty() {
        assert_eq!(render_symbol_grid(&[], 5), "");
    }

    #[test]
    fn test_handle_symbols_unknown_category_is_not_an_error() {
        let palette = Palette::default();
        let config = Config::default();
        let result = handle_symbols_command(
            &palette,
            Some("not-a-real-category".to_string()),
            None,
            None,
            false,
            &config,
        );
        assert!(result.is_ok());
    }
}
