use clap::{Args, Parser, Subcommand};
use fileorder_core::{ConventionOverrides, EntryKind};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Keep files and folders in a chosen order by numbering their names
#[derive(Parser, Debug)]
#[command(name = "fileorder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log more details to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Read settings from this file instead of .fileorder.toml or the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Which sibling group a command works on
#[derive(Args, Debug, Clone, Default)]
pub struct GroupArgs {
    /// Only files
    #[arg(long, conflicts_with = "folders")]
    pub files: bool,

    /// Only folders
    #[arg(long)]
    pub folders: bool,
}

impl GroupArgs {
    /// The selected groups, or `default` when neither flag is given
    pub fn kinds(&self, default: &[EntryKind]) -> Vec<EntryKind> {
        if self.files {
            vec![EntryKind::File]
        } else if self.folders {
            vec![EntryKind::Folder]
        } else {
            default.to_vec()
        }
    }
}

/// Numbering settings that replace the ones found in the current names
#[derive(Args, Debug, Clone, Default)]
pub struct ConventionArgs {
    /// Text between the number and the title, e.g. ". " or "_"
    #[arg(long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Zero-pad numbers to at least this many digits
    #[arg(long)]
    pub prefix_min_length: Option<usize>,

    /// Number given to the first entry
    #[arg(long)]
    pub starting_index: Option<u64>,
}

impl From<ConventionArgs> for ConventionOverrides {
    fn from(args: ConventionArgs) -> Self {
        Self {
            delimiter: args.delimiter,
            prefix_min_length: args.prefix_min_length,
            starting_index: args.starting_index,
        }
    }
}

/// A `NAME:POS` move, with a 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveArg {
    pub name: String,
    pub position: usize,
}

pub fn parse_move(value: &str) -> Result<MoveArg, String> {
    let (name, position) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("invalid move '{value}': expected NAME:POS"))?;
    if name.is_empty() {
        return Err(format!("invalid move '{value}': missing name"));
    }
    let position: usize = position
        .parse()
        .map_err(|_| format!("invalid move '{value}': '{position}' is not a position"))?;
    if position == 0 {
        return Err(format!("invalid move '{value}': positions start at 1"));
    }
    Ok(MoveArg {
        name: name.to_string(),
        position,
    })
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the numbering convention of a folder and the entries that break it
    Inspect {
        /// Folder whose children are inspected
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Put entries in a new order by renumbering them
    Reorder {
        /// Folder whose children are reordered
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        group: GroupArgs,

        /// Entry to put first; repeat to list several in order
        #[arg(long = "order", value_name = "NAME")]
        order: Vec<String>,

        /// Move an entry to a 1-based position, applied after --order
        #[arg(long = "move", value_name = "NAME:POS", value_parser = parse_move)]
        moves: Vec<MoveArg>,

        #[command(flatten)]
        convention: ConventionArgs,

        /// Only show what would be renamed
        #[arg(long)]
        dry_run: bool,

        /// Preview output format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary
        #[arg(long)]
        quiet: bool,
    },

    /// Number entries that are missing a prefix after their numbered siblings
    Fix {
        /// Folder whose children are fixed
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Only show what would be renamed
        #[arg(long)]
        dry_run: bool,

        /// Preview output format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary
        #[arg(long)]
        quiet: bool,
    },

    /// Remove the number prefixes so entries fall back to name order
    Clear {
        /// Folder whose children are cleared
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        group: GroupArgs,

        /// Only show what would be renamed
        #[arg(long)]
        dry_run: bool,

        /// Preview output format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the summary
        #[arg(long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
