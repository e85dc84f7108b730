use std::collections::HashMap;
use tracing::debug;

mod catalog;
mod category;


pub use category::Category;

/// Default cap on how many symbols a palette shows for one category
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// Default number of columns in the palette grid
pub const DEFAULT_GRID_COLUMNS: usize = 5;

/// Read-only mapping from category key to its ordered symbols
///
/// Built once at startup and handed to whoever needs it. There is no API to
/// add, remove or edit entries after construction.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    categories: Vec<Category>,
    entries: HashMap<&'static str, &'static [&'static str]>,
}

impl SymbolRegistry {
    /// Builds the registry from the compiled-in catalog
    pub fn builtin() -> Self {
        let categories = Category::ALL.to_vec();
        let entries = categories
            .iter()
            .map(|category| (category.key(), category.builtin_symbols()))
            .collect();

        Self {
            categories,
            entries,
        }
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the symbols registered under `key`, or an empty slice if the
    /// key is unknown. Keys are compared exactly.
    pub fn lookup(&self, key: &str) -> &'static [&'static str] {
        match self.entries.get(key).copied() {
            Some(symbols) => symbols,
            None => {
                debug!("No symbols registered for category '{key}'");
                &[]
            }
        }
    }

    /// Typed variant of [`SymbolRegistry::lookup`]
    pub fn symbols(&self, category: Category) -> &'static [&'static str] {
        self.lookup(category.key())
    }

    /// Picks the symbol at `index` within the displayed portion of a category
    pub fn displayed_symbol(&self, key: &str, index: usize, limit: usize) -> Option<&'static str> {
        display_slice(self.lookup(key), limit).get(index).copied()
    }

    /// Total number of symbols across all categories, duplicates included
    pub fn symbol_count(&self) -> usize {
        self.entries.values().map(|symbols| symbols.len()).sum()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Truncates `symbols` to at most `limit` entries for display
///
/// Always a prefix of the input; the registry itself is never affected.
pub fn display_slice<T>(symbols: &[T], limit: usize) -> &[T] {
    &symbols[..symbols.len().min(limit)]
}

/// Splits a displayed slice into grid rows of `columns` symbols each
pub fn grid_rows<T>(symbols: &[T], columns: usize) -> std::slice::Chunks<'_, T> {
    symbols.chunks(columns.max(1))
}
