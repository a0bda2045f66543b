//! Query Normalization Module
//!
//! Turns raw hashtag input into an ordered display list and a
//! canonical, order-independent cache key.

// == Constants ==
/// Prefix namespacing this cache's keys from any other logical cache
/// sharing the same store.
const KEY_NAMESPACE: &str = "live_streams_";

/// Separator between sanitized terms inside a cache key.
const KEY_SEPARATOR: &str = "_";

/// Hashtags searched when none are configured or supplied.
pub const DEFAULT_HASHTAGS: [&str; 4] = ["#gtarp", "#gta", "#roleplay", "#rp"];

// == Term Cleaning ==
/// Splits a comma separated hashtag list into trimmed, non-empty terms,
/// preserving first-seen order for display purposes.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves the effective query terms for one request.
///
/// An explicit comma separated list wins when it cleans to at least one
/// term; otherwise the configured set is used, falling back to
/// [`DEFAULT_HASHTAGS`] when that is empty too.
pub fn resolve_terms(explicit: Option<&str>, configured: &[String]) -> Vec<String> {
    if let Some(raw) = explicit {
        let terms = parse_terms(raw);
        if !terms.is_empty() {
            return terms;
        }
    }

    if configured.is_empty() {
        DEFAULT_HASHTAGS.iter().map(|tag| tag.to_string()).collect()
    } else {
        configured.to_vec()
    }
}

// == Cache Key ==
/// Derives the canonical cache key for a set of query terms.
///
/// Each term is lowercased and stripped of every non-alphanumeric
/// character (which removes `#` markers and stray whitespace), terms
/// that vanish entirely are dropped, the rest are sorted and joined.
/// Two term sets that differ only in order, marker or case therefore
/// map to the same key.
pub fn cache_key(terms: &[String]) -> String {
    let mut sanitized: Vec<String> = terms
        .iter()
        .map(|term| {
            term.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|term| !term.is_empty())
        .collect();

    sanitized.sort();
    sanitized.dedup();

    format!("{}{}", KEY_NAMESPACE, sanitized.join(KEY_SEPARATOR))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_terms_trims_and_drops_empty() {
        let parsed = parse_terms(" #gta , ,#rp,  ");
        assert_eq!(parsed, terms(&["#gta", "#rp"]));
    }

    #[test]
    fn test_parse_terms_all_empty() {
        assert!(parse_terms(" , ,").is_empty());
    }

    #[test]
    fn test_resolve_terms_explicit_wins() {
        let configured = terms(&["#configured"]);
        let resolved = resolve_terms(Some("#a,#b"), &configured);
        assert_eq!(resolved, terms(&["#a", "#b"]));
    }

    #[test]
    fn test_resolve_terms_empty_explicit_falls_back() {
        let configured = terms(&["#configured"]);
        let resolved = resolve_terms(Some(" , "), &configured);
        assert_eq!(resolved, configured);
    }

    #[test]
    fn test_resolve_terms_default_fallback() {
        let resolved = resolve_terms(None, &[]);
        assert_eq!(resolved, terms(&DEFAULT_HASHTAGS));
    }

    #[test]
    fn test_cache_key_order_and_case_independent() {
        let a = cache_key(&terms(&["#gta", "#RP"]));
        let b = cache_key(&terms(&["rp", "gta"]));
        assert_eq!(a, b);
        assert_eq!(a, "live_streams_gta_rp");
    }

    #[test]
    fn test_cache_key_strips_markers_and_whitespace() {
        let key = cache_key(&terms(&["# role play "]));
        assert_eq!(key, "live_streams_roleplay");
    }

    #[test]
    fn test_cache_key_default_terms() {
        let key = cache_key(&terms(&DEFAULT_HASHTAGS));
        assert_eq!(key, "live_streams_gta_gtarp_roleplay_rp");
    }

    #[test]
    fn test_cache_key_is_namespaced() {
        assert!(cache_key(&terms(&["#gta"])).starts_with("live_streams_"));
    }

    proptest! {
        // Any permutation of a term set produces the identical key.
        #[test]
        fn prop_cache_key_order_independent(
            mut set in prop::collection::vec("#?[a-zA-Z0-9]{1,12}", 1..8),
        ) {
            let original = cache_key(&set);
            set.reverse();
            prop_assert_eq!(cache_key(&set), original);
        }

        // The key never contains characters outside its fixed alphabet.
        #[test]
        fn prop_cache_key_alphabet(set in prop::collection::vec("[ -~]{0,16}", 0..6)) {
            let key = cache_key(&set);
            let body = key.strip_prefix("live_streams_").unwrap();
            prop_assert!(body.chars().all(|c| c.is_alphanumeric() || c == '_'));
        }
    }
}
