//! Static HTML output: per-export viewer pages and the sessions index.

pub mod index;
pub mod page;

pub use index::{index_dir_for_output, write_index, SessionEntry, INDEX_FILE};
pub use page::{viewer_title, write_viewer};

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
