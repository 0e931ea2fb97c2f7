/// Search helpers for list pages
use leptos::prelude::*;

/// Splits `text` into `(segment, is_match)` pieces for a case-insensitive
/// `query`. Texts whose lowercase form changes byte length are returned whole.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let query = query.to_lowercase();
    let lower = text.to_lowercase();
    if query.is_empty() || lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(&query) {
        let start = last + pos;
        let end = start + query.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last {
            parts.push((&text[last..start], false));
        }
        parts.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        parts.push((&text[last..], false));
    }
    parts
}

/// Highlights case-insensitive matches of `query` in `text`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, query)
        .into_iter()
        .map(|(segment, hit)| {
            let segment = segment.to_string();
            if hit {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{parts}</> }.into_any()
}
