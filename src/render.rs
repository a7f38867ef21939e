//! Projection of a colour collection into swatches.
//!
//! [`project`] is pure: same input, same output, nothing retained. Swatch keys
//! are positional. That is only sound because the collection is always
//! replaced wholesale; incremental inserts or removals would need keys derived
//! from the colour itself or assigned by the server.

use std::fmt::Write;

use crate::constants::SWATCH_CLASS;
use crate::model::ColourDescriptor;

/// One rendered colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Identity key (position in the collection)
    pub key: usize,
    /// Background fill, the descriptor's css value
    pub fill: String,
    /// Visible label, also the css value
    pub label: String,
}

/// Map each descriptor to a swatch, preserving order.
pub fn project(colours: &[ColourDescriptor]) -> Vec<Swatch> {
    colours
        .iter()
        .enumerate()
        .map(|(key, colour)| Swatch {
            key,
            fill: colour.css.clone(),
            label: colour.css.clone(),
        })
        .collect()
}

/// Render swatches as the markup the browser view builds.
pub fn to_html(swatches: &[Swatch]) -> String {
    let mut html = String::new();
    for swatch in swatches {
        // Writing to a String cannot fail
        let _ = writeln!(
            html,
            r#"<div class="{}" data-key="{}" style="background: {}">{}</div>"#,
            SWATCH_CLASS,
            swatch.key,
            escape(&swatch.fill),
            escape(&swatch.label)
        );
    }
    html
}

/// One `key: label` line per swatch.
pub fn to_text(swatches: &[Swatch]) -> String {
    let mut text = String::new();
    for swatch in swatches {
        let _ = writeln!(text, "{}: {}", swatch.key, swatch.label);
    }
    text
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
