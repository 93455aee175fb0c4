pub mod config;
pub mod output;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::OutputFormat;
pub use wpblocks_parser::{
    Block, Diagnostic, Limits, ParseOptions, ParseOutput, Segment, Severity, Summary,
    strip_markers,
};

/// Parses a document into blocks and text fragments.
///
/// # Examples
///
/// ```no_run
/// use wpblocks::{ConfigBuilder, parse};
///
/// let cfg = ConfigBuilder::default().max_markers(100).build();
/// let output = parse("<!-- wp:image {\"id\":5} /-->", Some(&cfg));
/// println!("{:#?}", output.segments);
/// ```
///
/// # Arguments
///
/// * `input` - The HTML document to parse
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<&Config>) -> ParseOutput {
    let options = config.map(Config::parse_options).unwrap_or_default();
    wpblocks_parser::parse_with_options(input, &options)
}
