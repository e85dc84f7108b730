// Library interface for unicode-palette
pub mod cli;
pub mod config;
pub mod core;
pub mod symbols;

use std::path::PathBuf;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::destination::{DestinationContext, DestinationKind, Handle, Host};
pub use crate::core::dispatcher::{InsertError, InsertionDispatcher, InsertionOutcome, SkipReason};
pub use crate::core::palette::Palette;
pub use crate::core::registry::{Category, SymbolRegistry};
pub use crate::core::workspace::Workspace;

/// Destination selectable from the command line
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTarget {
    /// The active text buffer
    Text,
    /// The active timeline strip
    Strip,
    /// The first text object in the scene
    Scene,
}

impl From<InsertTarget> for DestinationKind {
    fn from(target: InsertTarget) -> Self {
        match target {
            InsertTarget::Text => DestinationKind::TextBuffer,
            InsertTarget::Strip => DestinationKind::TimelineStrip,
            InsertTarget::Scene => DestinationKind::SceneTextObject,
        }
    }
}

// Re-export CLI types for testing
#[derive(clap::Args, Debug, Clone)]
pub struct InsertArgs {
    /// Symbol to insert, taken verbatim
    #[arg(required_unless_present = "from", conflicts_with = "from")]
    pub symbol: Option<String>,

    /// Pick the symbol from this category instead (exact category name)
    #[arg(long, requires = "index")]
    pub from: Option<String>,

    /// Position of the symbol within the category's displayed symbols (0-based)
    #[arg(long, requires = "from")]
    pub index: Option<usize>,

    /// Workspace file to insert into (overrides config file)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Destination to use instead of the workspace's active space
    #[arg(long, value_enum)]
    pub into: Option<InsertTarget>,
}

#[derive(clap::Parser, Debug)]
pub enum WorkspaceCommands {
    /// Write a starter workspace with one destination of each kind
    Init {
        /// Workspace file to create (overrides config file)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the destinations in a workspace and which one is active
    Show {
        /// Workspace file to read (overrides config file)
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
}
