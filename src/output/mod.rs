// Output formatting: terminal display helpers.

pub mod terminal;

/// Shorten catalog descriptions, fighter lore and table cells to `max_chars`
/// characters, marking the cut with "...".
///
/// Counts characters rather than bytes, so names like "José Aldo" are cut
/// cleanly.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Title-case a kebab-case tag for display: `rise-to-glory` -> `Rise To Glory`.
pub fn format_tag(tag: &str) -> String {
    tag.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join display-formatted tags with ", ", or "-" for an empty set.
pub fn format_tags<'a>(tags: impl IntoIterator<Item = &'a String>) -> String {
    let formatted: Vec<String> = tags.into_iter().map(|t| format_tag(t)).collect();
    if formatted.is_empty() {
        "-".to_string()
    } else {
        formatted.join(", ")
    }
}
