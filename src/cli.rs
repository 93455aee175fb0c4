use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wpblocks")]
#[command(author, version)]
#[command(about = "Parse block-editor comment markers in HTML into structured blocks")]
#[command(
    long_about = "wpblocks reads HTML exported by a block-based content editor and splits it \
    into an ordered sequence of typed blocks (from <!-- wp:name {json} --> comment markers) and \
    the plain markup between them. Malformed markers are kept as text, never dropped."
)]
#[command(after_help = "\
EXAMPLES:

    # Parse a file and print its segments as JSON
    wpblocks parse post.html

    # Parse from stdin and print a block summary
    cat post.html | wpblocks parse --format summary

    # Remove all block markers, keeping the markup
    wpblocks strip post.html

    # Use custom config
    wpblocks parse --config custom.toml post.html

CONFIGURATION:

wpblocks looks for configuration files in this order:
  1. Explicit --config path
  2. wpblocks.toml or .wpblocks.toml in current/parent directories
  3. ~/.config/wpblocks/config.toml (XDG)
  4. Built-in defaults

Example .wpblocks.toml:

    output = \"json\"
    pretty = true

    [limits]
    max_document_chars = 1000000
    max_markers = 1000")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, wpblocks will \
        search for .wpblocks.toml or wpblocks.toml in the input's directory and its parents, \
        then fall back to ~/.config/wpblocks/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document into blocks and text fragments
    #[command(
        long_about = "Parse a document and print the ordered sequence of blocks and text \
        fragments. Diagnostics (invalid attribute JSON, limits reached) are printed to stderr."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse to JSON
    wpblocks parse post.html

    # Compact JSON
    wpblocks parse --compact post.html

    # Fail (exit code 1) when any marker could not be parsed
    wpblocks parse --check post.html")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Exit with code 1 if any diagnostic was produced
        #[arg(long)]
        check: bool,
    },
    /// Remove block marker comments, keeping the surrounding markup
    #[command(
        long_about = "Remove every block marker comment (opening, closing and self-closing) \
        from the document and print the remaining markup, trimmed."
    )]
    Strip {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Debug,
    Summary,
}
