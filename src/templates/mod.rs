// src/templates/mod.rs
pub mod about;
pub mod cards;
pub mod error;
pub mod index;
pub mod join;
pub mod media;
pub mod quiz;
pub mod starknet;
pub mod tracks;
pub mod wallets;
pub mod wizard;

mod layout;

pub use layout::{render_form_page, render_page};

use pulldown_cmark::{html, Parser};

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders trusted, compiled-in markdown to HTML.
pub fn markdown(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, Parser::new(source));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_emphasis_and_lists() {
        let out = markdown("**bold**\n\n- one\n- two");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<li>one</li>"));
    }
}
