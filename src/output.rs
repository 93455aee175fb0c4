//! Text renderings of parse results for the command line.

use std::fmt::Write as _;
use std::io;

use wpblocks_parser::{ParseOutput, Segment, Summary};

use crate::config::OutputFormat;

/// Render the segments of `output` in the requested format.
pub fn render(output: &ParseOutput, format: OutputFormat, pretty: bool) -> io::Result<String> {
    match format {
        OutputFormat::Json => render_json(&output.segments, pretty),
        OutputFormat::Debug => Ok(format!("{:#?}", output.segments)),
        OutputFormat::Summary => Ok(render_summary(&output.summary())),
    }
}

fn render_json(segments: &[Segment], pretty: bool) -> io::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(segments)?
    } else {
        serde_json::to_string(segments)?
    };
    Ok(json)
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = format!(
        "{} block(s), {} fragment(s)",
        summary.blocks, summary.fragments
    );
    let width = summary.names.keys().map(|n| n.len()).max().unwrap_or(0);
    for (name, count) in &summary.names {
        let _ = write!(out, "\n  {name:<width$}  {count}");
    }
    out
}
