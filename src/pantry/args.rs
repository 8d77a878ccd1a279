use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pantry", bin_name = "pantry", version = get_version())]
#[command(about = "Keep track of what is in the pantry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add one unit of an item, creating it if needed
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Category for a new item (ignored if the item exists)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove one unit of an item, deleting it at zero
    #[command(alias = "rm")]
    Remove {
        /// Item name
        name: String,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Only show items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search items by name
    Search { query: String },

    /// Show item counts per category
    Summary,

    /// List the available categories
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (collection, default-category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_category() {
        let cli = Cli::try_parse_from(["pantry", "add", "egg", "-c", "dairy"]).unwrap();
        match cli.command {
            Some(Commands::Add { name, category }) => {
                assert_eq!(name, "egg");
                assert_eq!(category.as_deref(), Some("dairy"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_aliases() {
        let cli = Cli::try_parse_from(["pantry", "rm", "egg"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove { .. })));

        let cli = Cli::try_parse_from(["pantry", "ls", "-s", "app"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { search: Some(_) })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["pantry", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
