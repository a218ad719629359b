//! Keyword lists and the matching primitives used by the classifier.
//!
//! Inputs are expected to be lowercased already; keywords are stored lowercase.

pub const REMOTE_KEYWORDS: &[&str] = &["remote"];

pub const RELOCATION_KEYWORDS: &[&str] = &[
    "visa",
    "relocation",
    "work permit",
    "relocate",
    "sponsorship",
];

/// Plain substring test: "remotely" matches "remote".
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Like `contains_any`, but an occurrence only counts when it is not glued to
/// a neighbouring letter or digit.
pub fn contains_any_word(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| contains_word(text, kw))
}

fn contains_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    text.match_indices(keyword).any(|(start, matched)| {
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lists_are_lowercase_and_unique() {
        for list in [REMOTE_KEYWORDS, RELOCATION_KEYWORDS] {
            for (i, kw) in list.iter().enumerate() {
                assert_eq!(*kw, kw.to_lowercase());
                assert!(!list[i + 1..].contains(kw), "duplicate keyword {kw}");
            }
        }
    }

    #[test]
    fn test_substring_match_is_loose() {
        assert!(contains_any("we work remotely", REMOTE_KEYWORDS));
        assert!(contains_any("nonremote", REMOTE_KEYWORDS));
        assert!(!contains_any("on-site only", REMOTE_KEYWORDS));
    }

    #[test]
    fn test_multi_word_keyword_matches() {
        assert!(contains_any("eu work permit required", RELOCATION_KEYWORDS));
        assert!(!contains_any("work from the office", RELOCATION_KEYWORDS));
    }

    #[test]
    fn test_word_match_respects_boundaries() {
        assert!(contains_any_word("fully remote.", REMOTE_KEYWORDS));
        assert!(contains_any_word("remote", REMOTE_KEYWORDS));
        assert!(contains_any_word("(remote/hybrid)", REMOTE_KEYWORDS));
        assert!(!contains_any_word("we work remotely", REMOTE_KEYWORDS));
        assert!(!contains_any_word("nonremote", REMOTE_KEYWORDS));
    }

    #[test]
    fn test_word_match_checks_every_occurrence() {
        // first hit is glued, second is standalone
        assert!(contains_any_word("remotely or remote", REMOTE_KEYWORDS));
    }

    #[test]
    fn test_word_match_handles_multibyte_neighbours() {
        assert!(!contains_any_word("éremote", REMOTE_KEYWORDS));
        assert!(contains_any_word("— remote —", REMOTE_KEYWORDS));
    }
}
