//! Author lists in citation form.
//!
//! Each raw entry is cleaned of its markers, abbreviated, bolded when it is
//! the CV subject, and tagged with a superscript `*` when it was marked as
//! the corresponding author.

use crate::document::{RichText, Span};
use crate::utils::{abbreviate_name, is_corresponding, name_contains, strip_markers};

/// Format an author list, emphasizing `highlight`.
pub fn format_authors<S: AsRef<str>>(authors: &[S], highlight: &str) -> RichText {
    let mut text = RichText::new();

    for (i, author) in authors.iter().enumerate() {
        let raw = author.as_ref();
        let clean = strip_markers(raw);
        let abbreviated = abbreviate_name(&clean);

        if i > 0 {
            text.push_str(", ");
        }

        if name_contains(&clean, highlight) {
            text.push(Span::plain(abbreviated).bold());
        } else {
            text.push_str(abbreviated);
        }

        if is_corresponding(raw) {
            text.push(Span::plain("*").superscript());
        }
    }

    text
}

/// Whether `name` is the first author or a marked corresponding author.
pub fn is_first_or_corresponding<S: AsRef<str>>(authors: &[S], name: &str) -> bool {
    let Some(first) = authors.first() else {
        return false;
    };

    if name_contains(&strip_markers(first.as_ref()), name) {
        return true;
    }

    authors
        .iter()
        .map(|author| author.as_ref())
        .filter(|raw| is_corresponding(raw))
        .any(|raw| name_contains(&strip_markers(raw), name))
}
