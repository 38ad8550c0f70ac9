//! # Panel Template
//!
//! Renders one jurisdiction's record into the details-panel HTML. The
//! template is fixed: a heading with the display name, then the optional
//! sections in a fixed order. A list-backed section is present only when
//! its list is non-empty; the overview alone has a default text when absent.

use regatlas_core::CountryRecord;

use crate::escape::escape_html;

/// Default overview text used when a record has no overview.
pub const NO_OVERVIEW_TEXT: &str = "No overview available";

/// Render the two-line no-data placeholder for a region without a record.
pub fn render_placeholder(display_name: &str) -> String {
    let name = escape_html(display_name);
    format!(
        "<h2>{name}</h2>\n\
         <p class=\"no-data\">No regulatory information available for {name} yet.</p>\n\
         <p class=\"no-data\">Check back as coverage expands.</p>\n"
    )
}

/// Render a record into the fixed-order section template.
pub fn render_record(display_name: &str, record: &CountryRecord) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(display_name)));

    // Overview — always present, defaulted when the record has none.
    html.push_str("<section class=\"overview\">\n<h3>Overview</h3>\n");
    let overview = record.overview.as_deref().unwrap_or(NO_OVERVIEW_TEXT);
    html.push_str(&format!("<p>{}</p>\n", escape_html(overview)));
    html.push_str("</section>\n");

    // Main Rules — omitted entirely when there are no regulations.
    if !record.regulations.is_empty() {
        html.push_str("<section class=\"regulations\">\n<h3>Main Rules</h3>\n<ul>\n");
        for regulation in &record.regulations {
            html.push_str(&format!(
                "<li><strong>{}</strong> {}</li>\n",
                escape_html(&regulation.title),
                escape_html(&regulation.description)
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !record.requirements.is_empty() {
        html.push_str(&text_list_section(
            "requirements",
            "Requirements",
            &record.requirements,
        ));
    }

    if !record.authorities.is_empty() {
        html.push_str(&text_list_section(
            "authorities",
            "Who's in Charge",
            &record.authorities,
        ));
    }

    // Sources — links open in a new browsing context.
    if !record.sources.is_empty() {
        html.push_str("<section class=\"sources\">\n<h3>Sources</h3>\n<ul>\n");
        for source in &record.sources {
            html.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>\n",
                escape_html(&source.url),
                escape_html(&source.name)
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if let Some(date) = record.last_updated.as_deref() {
        html.push_str(&format!(
            "<p class=\"last-updated\">Last updated: {}</p>\n",
            escape_html(date)
        ));
    }

    html
}

fn text_list_section(class: &str, title: &str, items: &[String]) -> String {
    let mut section = format!("<section class=\"{class}\">\n<h3>{title}</h3>\n<ul>\n");
    for item in items {
        section.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    section.push_str("</ul>\n</section>\n");
    section
}
