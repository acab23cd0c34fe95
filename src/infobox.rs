//! Infobox renderer: tagged-variant dispatch onto fixed label/value
//! templates.
//!
//! Provider-supplied fragments (dictionary definitions, encyclopedia
//! extracts) may contain markup; they are escaped here, at the render
//! boundary, so nothing downstream ever injects raw provider HTML.

use crate::types::Infobox;
use serde::Serialize;

/// A display-ready infobox: a heading, label/value rows, and an optional
/// source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoboxView {
    /// Panel heading.
    pub heading: String,
    /// Fixed label/value pairs for the variant's template.
    pub rows: Vec<(String, String)>,
    /// Link to the answer's source, when one exists.
    pub source_url: Option<String>,
}

/// Render an infobox variant, or nothing.
///
/// Dispatch is exhaustive over the closed variant set; an absent or
/// unrecognised infobox simply renders nothing — no error, no fallthrough.
pub fn render(infobox: &Infobox) -> Option<InfoboxView> {
    match infobox {
        Infobox::Calc { equation, result } => Some(InfoboxView {
            heading: format!("{equation} = {result}"),
            rows: vec![
                ("Equation".into(), equation.clone()),
                ("Result".into(), result.clone()),
            ],
            source_url: None,
        }),
        Infobox::Definition {
            word,
            part_of_speech,
            definition_html,
            source_url,
        } => {
            let mut rows = Vec::with_capacity(2);
            if let Some(part_of_speech) = part_of_speech {
                rows.push(("Part of speech".into(), part_of_speech.clone()));
            }
            rows.push(("Definition".into(), escape(definition_html.as_deref())));
            Some(InfoboxView {
                heading: word.clone(),
                rows,
                source_url: Some(source_url.clone()),
            })
        }
        Infobox::Encyclopedia {
            title,
            summary_html,
            source_url,
        } => Some(InfoboxView {
            heading: title.clone(),
            rows: vec![("Summary".into(), escape(summary_html.as_deref()))],
            source_url: source_url.clone(),
        }),
        Infobox::Unrecognized => None,
    }
}

/// Escape a provider-supplied fragment for plain-text display.
fn escape(fragment: Option<&str>) -> String {
    html_escape::encode_text(fragment.unwrap_or_default()).into_owned()
}
