//! # Render — Panel HTML for one jurisdiction.
//!
//! Renders the info-panel HTML a selection would produce, to stdout, so
//! curators can review content changes without starting the server.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use regatlas_core::CountryCode;
use regatlas_panel::{render_placeholder, render_record};

use crate::load_dataset;

/// Render subcommand arguments.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Two-letter jurisdiction code (e.g., SG).
    pub code: String,

    /// Display name to render in the heading. Defaults to the code.
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute the render subcommand.
pub fn run_render(args: &RenderArgs, data_dir: &Path) -> Result<u8> {
    let code = match CountryCode::new(args.code.clone()) {
        Ok(code) => code,
        Err(e) => bail!("invalid jurisdiction code {:?}: {e}", args.code),
    };

    let dataset = load_dataset(data_dir).context("loading dataset")?;
    let html = panel_html(&dataset, &code, args.name.as_deref());
    println!("{html}");
    Ok(0)
}

/// The panel HTML for a jurisdiction: the record template when a record
/// exists (sparse records fall back to default section text), the no-data
/// placeholder otherwise. Matches what the serving layer renders.
fn panel_html(
    dataset: &regatlas_core::CountryDataset,
    code: &CountryCode,
    name: Option<&str>,
) -> String {
    let display_name = name.unwrap_or(code.as_str());
    match dataset.get(code) {
        Some(record) => render_record(display_name, record),
        None => render_placeholder(display_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regatlas_core::CountryDataset;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).unwrap()
    }

    #[test]
    fn test_known_jurisdiction_renders_content() {
        let dataset = CountryDataset::fallback();
        let html = panel_html(&dataset, &code("SG"), Some("Singapore"));
        assert!(html.contains("<h2>Singapore</h2>"));
        assert!(html.contains("Overview"));
    }

    #[test]
    fn test_unknown_jurisdiction_renders_placeholder() {
        let dataset = CountryDataset::fallback();
        let html = panel_html(&dataset, &code("BR"), Some("Brazil"));
        assert!(html.contains("no-data"));
        assert!(html.contains("Brazil"));
    }

    #[test]
    fn test_empty_record_renders_template_not_placeholder() {
        // An existing record renders the section template even when empty,
        // exactly as the serving layer does.
        let mut dataset = CountryDataset::default();
        dataset.upsert(code("JP"), regatlas_core::CountryRecord::default());
        let html = panel_html(&dataset, &code("JP"), Some("Japan"));
        assert!(html.contains(regatlas_panel::NO_OVERVIEW_TEXT));
        assert!(!html.contains("no-data"));
    }

    #[test]
    fn test_name_defaults_to_code() {
        let dataset = CountryDataset::fallback();
        let html = panel_html(&dataset, &code("SG"), None);
        assert!(html.contains("<h2>SG</h2>"));
    }
}
