// Tag extraction: theme, genre and narrative tags from raw catalog and
// fighter fields.

pub mod history;
pub mod keyword;
pub mod stats;
pub mod traits;
pub mod vocabulary;

use crate::models::TagSet;

pub use keyword::{extract_content_tags, extract_fighter_tags, KeywordTagger};
pub use traits::{ContentFields, FighterFields, TagExtractor};

/// Normalize a raw tag into lowercase kebab-case.
///
/// `"Rise to Glory"`, `"rise_to_glory"` and `" 'rise-to-glory' "` all become
/// `"rise-to-glory"`. Returns None when nothing usable is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
        }
        // Quotes, brackets and other punctuation are dropped
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Split a list cell into normalized tags.
///
/// Cells come either as comma-separated text (`"action, drama"`) or as a
/// bracketed list literal (`"['action', 'drama']"`). Empty cells yield an
/// empty set.
pub fn parse_tag_list(cell: &str) -> TagSet {
    split_list_cell(cell).iter().filter_map(|item| normalize_tag(item)).collect()
}

/// Split a list cell into its raw items, with brackets and quotes removed
/// but case and spacing inside each item kept.
pub fn split_list_cell(cell: &str) -> Vec<String> {
    cell.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|item| item.trim().trim_matches(|c: char| c == '\'' || c == '"').trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants_agree() {
        assert_eq!(normalize_tag("Rise to Glory").as_deref(), Some("rise-to-glory"));
        assert_eq!(normalize_tag("rise_to_glory").as_deref(), Some("rise-to-glory"));
        assert_eq!(normalize_tag(" 'rise-to-glory' ").as_deref(), Some("rise-to-glory"));
        assert_eq!(normalize_tag("Sci-Fi").as_deref(), Some("sci-fi"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("  '' "), None);
    }

    #[test]
    fn test_parse_list_literal() {
        let tags = parse_tag_list("['underdog', 'Rivalry', 'underdog']");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("underdog"));
        assert!(tags.contains("rivalry"));
    }

    #[test]
    fn test_split_keeps_label_text() {
        assert_eq!(
            split_list_cell("['Action & Adventure', \"Drama\"]"),
            vec!["Action & Adventure".to_string(), "Drama".to_string()]
        );
        assert!(split_list_cell("").is_empty());
    }

    #[test]
    fn test_parse_comma_separated() {
        let tags = parse_tag_list("action, drama ,");
        assert!(tags.contains("action"));
        assert!(tags.contains("drama"));
        assert_eq!(tags.len(), 2);
    }
}
