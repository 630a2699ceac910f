//! Headline-to-watchlist matching.

use super::Headline;

/// Compute the titles of headlines that mention at least one watchlist
/// symbol as a case-insensitive substring.
///
/// Pure derivation: the caller re-invokes it after any mutation to the
/// watchlist or the headline list. Feed order is preserved; an empty
/// watchlist yields an empty result rather than all headlines.
pub fn matched_titles(symbols: &[String], headlines: &[Headline]) -> Vec<String> {
    if symbols.is_empty() {
        return Vec::new();
    }

    headlines
        .iter()
        .filter(|headline| {
            let title = headline.title.to_uppercase();
            symbols.iter().any(|s| title.contains(&s.to_uppercase()))
        })
        .map(|headline| headline.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headlines(titles: &[&str]) -> Vec<Headline> {
        titles.iter().map(|t| Headline::new(*t, "#")).collect()
    }

    #[test]
    fn test_matches_symbol_as_substring() {
        let symbols = vec!["TCS".to_string()];
        let feed = headlines(&["TCS shares rally", "Gold prices fall"]);

        assert_eq!(matched_titles(&symbols, &feed), vec!["TCS shares rally"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let symbols = vec!["tcs".to_string()];
        let feed = headlines(&["Tcs posts record quarter"]);

        assert_eq!(
            matched_titles(&symbols, &feed),
            vec!["Tcs posts record quarter"]
        );
    }

    #[test]
    fn test_empty_watchlist_yields_empty_result() {
        let feed = headlines(&["TCS shares rally", "Gold prices fall"]);

        assert_eq!(matched_titles(&[], &feed), Vec::<String>::new());
    }

    #[test]
    fn test_preserves_feed_order() {
        let symbols = vec!["INFY".to_string(), "TCS".to_string()];
        let feed = headlines(&[
            "TCS shares rally",
            "Banking index slides",
            "INFY wins mega deal",
        ]);

        assert_eq!(
            matched_titles(&symbols, &feed),
            vec!["TCS shares rally", "INFY wins mega deal"]
        );
    }

    #[test]
    fn test_headline_matching_two_symbols_appears_once() {
        let symbols = vec!["TCS".to_string(), "INFY".to_string()];
        let feed = headlines(&["TCS and INFY lead IT gains"]);

        assert_eq!(
            matched_titles(&symbols, &feed),
            vec!["TCS and INFY lead IT gains"]
        );
    }

    #[test]
    fn test_idempotent() {
        let symbols = vec!["TCS".to_string()];
        let feed = headlines(&["TCS shares rally", "Gold prices fall"]);

        let first = matched_titles(&symbols, &feed);
        let second = matched_titles(&symbols, &feed);

        assert_eq!(first, second);
    }
}
