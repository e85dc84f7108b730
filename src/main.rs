use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

use unicode_palette::cli::browse::{handle_categories_command, handle_symbols_command};
use unicode_palette::cli::insert::handle_insert_command;
use unicode_palette::cli::workspace::handle_workspace_command;
use unicode_palette::config::{Config, PaletteConfig};
use unicode_palette::core::config_schema::ConfigSchema;
use unicode_palette::core::dispatcher::InsertionDispatcher;
use unicode_palette::symbols::*;
use unicode_palette::{InsertArgs, Palette, SymbolRegistry, WorkspaceCommands};

#[derive(Parser)]
#[command(name = "unicode-palette")]
#[command(about = "Browse Unicode symbols by category and insert them into text destinations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum)]
    completions: Option<Shell>,

    /// Generate man page
    #[arg(long)]
    man: bool,

    /// Show detailed information about the tool
    #[arg(long)]
    info: bool,

    /// Print the JSON schema of the [palette] config section
    #[arg(long)]
    palette_schema: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
enum Commands {
    /// List the symbol categories
    Categories {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the symbols of a category as a grid
    Symbols {
        /// Category name, matched exactly (defaults to the configured category)
        category: Option<String>,

        /// Maximum number of symbols to show (overrides config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of grid columns (overrides config file)
        #[arg(long)]
        columns: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Insert a symbol into the active destination of a workspace
    Insert(InsertArgs),
    /// Manage the workspace file that holds insertion destinations
    #[command(subcommand)]
    Workspace(WorkspaceCommands),
}

fn create_subscriber(
    verbose: bool,
    time_format: String,
) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let format_desc = match time::format_description::parse_owned::<1>(&time_format) {
        Ok(format_desc) => format_desc,
        Err(_) => {
            eprintln!("Custom time format '{time_format}' not supported. Using default format.");
            time::format_description::parse_owned::<1>(
                "[year]-[month]-[day] [hour]:[minute]:[second]",
            )
            .expect("default time format is valid")
        }
    };

    Box::new(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
            .finish(),
    )
}

fn print_info() {
    println!("{SYMBOL_TOOL_CONFIG} unicode-palette v{}", env!("CARGO_PKG_VERSION"));
    println!("{SYMBOL_DOC_BOOK} {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("{SYMBOL_CATALOG_CATEGORY} License: {}", env!("CARGO_PKG_LICENSE"));
    println!();
    let registry = SymbolRegistry::builtin();
    println!(
        "{SYMBOL_CATALOG_PALETTE} Catalog: {} symbols in {} categories",
        registry.symbol_count(),
        registry.categories().len()
    );
    println!();
    println!("{SYMBOL_CATALOG_PALETTE} Destinations:");
    println!("  • text buffer       symbol lands at the cursor");
    println!("  • timeline strip    only text strips accept symbols");
    println!("  • scene text object first font object in the scene");
    println!();
    println!("🚀 Usage:");
    println!("   unicode-palette categories                 # List categories");
    println!("   unicode-palette symbols \"Greek Letters\"    # Show a category");
    println!("   unicode-palette workspace init             # Create workspace.toml");
    println!("   unicode-palette insert ★                   # Insert a symbol");
    println!("   Use --help for detailed options");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --completions flag early
    if let Some(shell) = args.completions {
        let mut app = Args::command();
        generate(shell, &mut app, "unicode-palette", &mut io::stdout());
        return Ok(());
    }

    // Handle --man flag early
    if args.man {
        let app = Args::command();
        let man = Man::new(app);
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    if args.info {
        print_info();
        return Ok(());
    }

    if args.palette_schema {
        println!("{}", PaletteConfig::schema_json()?);
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        Config::load_from_file(config_path).await?
    } else {
        Config::load().await?
    };

    let verbose = args.verbose || config.is_verbose_default();
    let subscriber = create_subscriber(verbose, config.get_time_format());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set default subscriber");

    if let Some(config_path) = &args.config {
        info!("{SYMBOL_INDICATOR_INFO} Using custom config file: {}", config_path.display());
    }

    let palette = Palette::new(
        SymbolRegistry::builtin(),
        InsertionDispatcher::with_options(config.get_dispatch_options()),
    );

    match args.command {
        Some(Commands::Categories { json }) => handle_categories_command(&palette, json),
        Some(Commands::Symbols {
            category,
            limit,
            columns,
            json,
        }) => handle_symbols_command(&palette, category, limit, columns, json, &config),
        Some(Commands::Insert(insert_args)) => {
            match handle_insert_command(insert_args, &config).await {
                Ok(_) => Ok(()),
                Err(e) => {
                    error!("{SYMBOL_INDICATOR_ERROR} {e:#}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Workspace(command)) => handle_workspace_command(command, &config).await,
        None => {
            // Default behavior: show the default category
            handle_symbols_command(&palette, None, None, None, false, &config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_palette::InsertTarget;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["unicode-palette"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(args.command.is_none());

        let args = Args::parse_from([
            "unicode-palette",
            "symbols",
            "Greek Letters",
            "--limit",
            "10",
            "--columns",
            "4",
        ]);
        match args.command {
            Some(Commands::Symbols {
                category,
                limit,
                columns,
                json,
            }) => {
                assert_eq!(category.as_deref(), Some("Greek Letters"));
                assert_eq!(limit, Some(10));
                assert_eq!(columns, Some(4));
                assert!(!json);
            }
            _ => panic!("Expected Symbols command"),
        }

        let args = Args::parse_from(["unicode-palette", "--verbose", "categories", "--json"]);
        assert!(args.verbose);
        assert!(matches!(args.command, Some(Commands::Categories { json: true })));
    }

    #[test]
    fn test_insert_args_parsing() {
        let args = Args::parse_from([
            "unicode-palette",
            "insert",
            "★",
            "--workspace",
            "/tmp/ws.toml",
            "--into",
            "scene",
        ]);
        match args.command {
            Some(Commands::Insert(insert)) => {
                assert_eq!(insert.symbol.as_deref(), Some("★"));
                assert_eq!(insert.workspace, Some(PathBuf::from("/tmp/ws.toml")));
                assert_eq!(insert.into, Some(InsertTarget::Scene));
            }
            _ => panic!("Expected Insert command"),
        }

        let args = Args::parse_from([
            "unicode-palette",
            "insert",
            "--from",
            "Currency",
            "--index",
            "3",
        ]);
        match args.command {
            Some(Commands::Insert(insert)) => {
                assert!(insert.symbol.is_none());
                assert_eq!(insert.from.as_deref(), Some("Currency"));
                assert_eq!(insert.index, Some(3));
            }
            _ => panic!("Expected Insert command"),
        }
    }

    #[test]
    fn test_insert_args_require_symbol_or_category() {
        assert!(Args::try_parse_from(["unicode-palette", "insert"]).is_err());
        assert!(Args::try_parse_from(["unicode-palette", "insert", "--from", "Currency"]).is_err());
        assert!(Args::try_parse_from([
            "unicode-palette",
            "insert",
            "★",
            "--from",
            "Currency",
            "--index",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn test_subscriber_accepts_bad_time_format() {
        // falls back to the default format instead of panicking
        let _ = create_subscriber(false, "[not a component]".to_string());
        let _ = create_subscriber(true, "[hour]:[minute]".to_string());
    }
}
