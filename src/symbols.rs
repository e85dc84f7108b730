// Visual symbols used in log output and CLI listings
// Using generic names that represent meaning rather than the specific emoji

/// Status and feedback symbols
pub const SYMBOL_INDICATOR_SUCCESS: &str = "✅";
pub const SYMBOL_INDICATOR_ERROR: &str = "❌";
pub const SYMBOL_INDICATOR_WARNING: &str = "⚠️";
pub const SYMBOL_INDICATOR_INFO: &str = "📋";

/// Destination symbols, one per insertion target kind
pub const SYMBOL_DESTINATION_TEXT: &str = "📝";
pub const SYMBOL_DESTINATION_STRIP: &str = "🎞️";
pub const SYMBOL_DESTINATION_SCENE: &str = "🧊";

/// Catalog symbols
pub const SYMBOL_CATALOG_CATEGORY: &str = "🗂️";
pub const SYMBOL_CATALOG_PALETTE: &str = "🎨";
pub const SYMBOL_CONTENT_ARROW_RIGHT: &str = "→";

/// Tool symbols
pub const SYMBOL_TOOL_CONFIG: &str = "🔧";
pub const SYMBOL_DOC_BOOK: &str = "📖";

