//! Category filter and free-text search over ticker lists.
//!
//! Both steps keep the relative order of their input and never add records.
//! The owned variants clone the kept tickers; the `*_view` variants borrow.

use super::Ticker;
use crate::shared::CategoryToken;

/// Whether `symbol` starts or ends with the category token (case-sensitive).
pub fn matches_category(symbol: &str, category: &CategoryToken) -> bool {
    let token = category.as_str();
    symbol.starts_with(token) || symbol.ends_with(token)
}

/// Whether the case-folded `symbol` contains the case-folded `query`.
pub fn matches_query(symbol: &str, query: &str) -> bool {
    symbol.to_lowercase().contains(&query.to_lowercase())
}

/// Keep tickers whose symbol starts or ends with `category`.
///
/// A symbol matching on both ends is kept once.
pub fn filter_by_category(all: &[Ticker], category: &CategoryToken) -> Vec<Ticker> {
    category_view(all, category).into_iter().cloned().collect()
}

/// Refine an already category-filtered list by case-insensitive substring.
///
/// An empty query matches everything, so it returns the input unchanged.
pub fn search_within(filtered: &[Ticker], query: &str) -> Vec<Ticker> {
    let query = query.to_lowercase();
    filtered
        .iter()
        .filter(|t| t.symbol().as_str().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Borrowing form of [`filter_by_category`].
pub fn category_view<'a>(all: &'a [Ticker], category: &CategoryToken) -> Vec<&'a Ticker> {
    all.iter()
        .filter(|t| matches_category(t.symbol().as_str(), category))
        .collect()
}

/// Borrowing form of [`search_within`].
pub fn search_view<'a>(filtered: Vec<&'a Ticker>, query: &str) -> Vec<&'a Ticker> {
    let query = query.to_lowercase();
    filtered
        .into_iter()
        .filter(|t| t.symbol().as_str().to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ticker(symbol: &str) -> Ticker {
        Ticker::new(symbol, "1.0")
    }

    fn symbols(list: &[Ticker]) -> Vec<&str> {
        list.iter().map(|t| t.symbol().as_str()).collect()
    }

    fn sample() -> Vec<Ticker> {
        vec![
            ticker("BTCUSD"),
            ticker("ETHUSD"),
            ticker("LTCBTC"),
            ticker("ETHBTC"),
            ticker("BTCEURS"),
            ticker("XRPUSDT"),
            ticker("BTC"),
        ]
    }

    #[test]
    fn test_filter_keeps_prefix_and_suffix_in_order() {
        let all = vec![ticker("BTCUSD"), ticker("ETHUSD"), ticker("LTCBTC")];
        let filtered = filter_by_category(&all, &CategoryToken::from("BTC"));
        assert_eq!(symbols(&filtered), vec!["BTCUSD", "LTCBTC"]);
    }

    #[test]
    fn test_filter_both_ends_appears_once() {
        let all = vec![ticker("BTCBTC"), ticker("BTC"), ticker("ETHUSD")];
        let filtered = filter_by_category(&all, &CategoryToken::from("BTC"));
        assert_eq!(symbols(&filtered), vec!["BTCBTC", "BTC"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let all = vec![ticker("btcusd"), ticker("BTCUSD")];
        let filtered = filter_by_category(&all, &CategoryToken::from("BTC"));
        assert_eq!(symbols(&filtered), vec!["BTCUSD"]);
    }

    #[test]
    fn test_filter_does_not_match_middle() {
        let all = vec![ticker("XBTCY")];
        assert!(filter_by_category(&all, &CategoryToken::from("BTC")).is_empty());
    }

    #[test]
    fn test_filter_subset_no_duplicates_all_match() {
        let all = sample();
        for category in CategoryToken::defaults() {
            let filtered = filter_by_category(&all, &category);
            let mut seen = HashSet::new();
            for t in &filtered {
                assert!(all.contains(t));
                assert!(seen.insert(t.symbol().clone()), "duplicate {}", t.symbol());
                assert!(matches_category(t.symbol().as_str(), &category));
            }
        }
    }

    #[test]
    fn test_overlapping_categories_follow_selection() {
        // ETHBTC belongs to both the ETH and the BTC views.
        let all = vec![ticker("ETHBTC")];
        assert_eq!(filter_by_category(&all, &CategoryToken::from("ETH")).len(), 1);
        assert_eq!(filter_by_category(&all, &CategoryToken::from("BTC")).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filtered = filter_by_category(&sample(), &CategoryToken::from("BTC"));
        let searched = search_within(&filtered, "eth");
        assert_eq!(symbols(&searched), vec!["ETHBTC"]);

        let searched = search_within(&filtered, "Xr");
        assert!(searched.is_empty());

        let searched = search_within(&filtered, "cUs");
        assert_eq!(symbols(&searched), vec!["BTCUSD"]);
    }

    #[test]
    fn test_search_refines_category_view_only() {
        let all = sample();
        let filtered = filter_by_category(&all, &CategoryToken::from("ETH"));
        // XRPUSDT contains "usd" but is outside the ETH view.
        let searched = search_within(&filtered, "usd");
        assert_eq!(symbols(&searched), vec!["ETHUSD"]);
    }

    #[test]
    fn test_search_subset_and_matches() {
        let filtered = filter_by_category(&sample(), &CategoryToken::from("USD"));
        for query in ["u", "USD", "xrp", "zzz"] {
            let searched = search_within(&filtered, query);
            for t in &searched {
                assert!(filtered.contains(t));
                assert!(matches_query(t.symbol().as_str(), query));
            }
        }
    }

    #[test]
    fn test_views_match_owned_variants() {
        let all = sample();
        let category = CategoryToken::from("BTC");
        let owned = search_within(&filter_by_category(&all, &category), "eur");
        let view = search_view(category_view(&all, &category), "eur");
        let view_owned: Vec<Ticker> = view.into_iter().cloned().collect();
        assert_eq!(owned, view_owned);
    }
}
