//! URL fragment parsing and building.
//!
//! The navigable surface is `#/<view>[?key=value&...]`. Parsing and
//! building round-trip: `parse(&build(route, params))` yields the same view
//! name and parameter set, including percent-encoded values.

use std::collections::BTreeMap;

/// Query parameters carried by a fragment. Structural equality is what the
/// router's redundant-navigation check relies on.
pub type Params = BTreeMap<String, String>;

/// Parse a fragment (`#/shop?category=tops`) into a view name and params.
///
/// The leading `#` is optional; an empty fragment is the root route. `/`
/// maps to `home`, `/x` maps to `x`. Keys and values are percent-decoded;
/// undecodable sequences are kept raw rather than rejected.
#[must_use]
pub fn parse(hash: &str) -> (String, Params) {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let fragment = if fragment.is_empty() { "/" } else { fragment };

    let (route, query) = match fragment.split_once('?') {
        Some((route, query)) => (route, Some(query)),
        None => (fragment, None),
    };

    let mut params = Params::new();
    if let Some(query) = query {
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.insert(decode(key), decode(value));
        }
    }

    let view = if route == "/" {
        "home".to_owned()
    } else {
        route.strip_prefix('/').unwrap_or(route).to_owned()
    };

    (view, params)
}

/// Build a fragment from a route and params: `#/shop?category=tops`.
///
/// Keys and values are percent-encoded. A leading `#` on `route` is
/// accepted and not doubled.
#[must_use]
pub fn build(route: &str, params: &Params) -> String {
    let mut hash = if route.starts_with('#') {
        route.to_owned()
    } else {
        format!("#{route}")
    };

    let query = params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&");

    if !query.is_empty() {
        hash.push('?');
        hash.push_str(&query);
    }

    hash
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty_fragments_map_to_home() {
        assert_eq!(parse("#/"), ("home".to_owned(), Params::new()));
        assert_eq!(parse(""), ("home".to_owned(), Params::new()));
        assert_eq!(parse("#"), ("home".to_owned(), Params::new()));
    }

    #[test]
    fn routes_map_to_view_names() {
        let (view, params) = parse("#/shop");
        assert_eq!(view, "shop");
        assert!(params.is_empty());
    }

    #[test]
    fn query_pairs_are_decoded() {
        let (view, params) = parse("#/shop?category=tops&search=%C3%A1o%20kho%C3%A1c");
        assert_eq!(view, "shop");
        assert_eq!(params.get("category").map(String::as_str), Some("tops"));
        assert_eq!(params.get("search").map(String::as_str), Some("áo khoác"));
    }

    #[test]
    fn valueless_pairs_become_empty_strings() {
        let (_, params) = parse("#/shop?sale");
        assert_eq!(params.get("sale").map(String::as_str), Some(""));
    }

    #[test]
    fn build_produces_the_canonical_fragment() {
        let params = Params::from([("category".to_owned(), "tops".to_owned())]);
        assert_eq!(build("/shop", &params), "#/shop?category=tops");
    }

    #[test]
    fn build_and_parse_round_trip() {
        let params = Params::from([
            ("category".to_owned(), "tops".to_owned()),
            ("search".to_owned(), "áo khoác".to_owned()),
        ]);
        let hash = build("/shop", &params);
        let (view, parsed) = parse(&hash);
        assert_eq!(view, "shop");
        assert_eq!(parsed, params);
    }

    #[test]
    fn existing_hash_prefix_is_not_doubled() {
        assert_eq!(build("#/about", &Params::new()), "#/about");
    }
}
