//! Property-based tests for query-string construction.
//!
//! These tests verify the query encoding with randomly generated inputs:
//! any parameter list the client can build must survive a decode through
//! the same application/x-www-form-urlencoded profile unchanged.
//!
//! # Invariants
//! - Encoding and decoding are exact inverses for arbitrary keys and values.
//! - Absent optional values leave the parameter list untouched.
//! - The `?` separator is present for every parameter list, including empty.
//!
//! # What this does NOT handle
//! - Endpoint-specific parameter names (see endpoint_tests)

use nicosia_client::endpoints::{QueryParams, build_query_url};
use proptest::prelude::*;

/// Generates realistic parameter keys (the backend uses camelCase and
/// snake_case ASCII names).
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}"
}

/// Generates parameter lists of up to 8 arbitrary pairs.
fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((key_strategy(), ".*"), 0..8)
}

fn params_from(pairs: &[(String, String)]) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in pairs {
        params = params.set(key, value);
    }
    params
}

proptest! {
    /// Encoding then decoding arbitrary pairs yields the original pairs,
    /// in order.
    #[test]
    fn prop_encode_decode_round_trip(pairs in pairs_strategy()) {
        let params = params_from(&pairs);

        let decoded: Vec<(String, String)> = url::form_urlencoded::parse(params.encode().as_bytes())
            .into_owned()
            .collect();

        prop_assert_eq!(decoded, pairs);
    }

    /// An absent optional is indistinguishable from never mentioning the key;
    /// a present optional is indistinguishable from a required parameter.
    #[test]
    fn prop_set_opt_matches_set(key in key_strategy(), value in ".*") {
        let skipped = QueryParams::new()
            .set("entityType", "TENANT")
            .set_opt(&key, None::<&str>);
        let baseline = QueryParams::new().set("entityType", "TENANT");
        prop_assert_eq!(skipped, baseline);

        let via_opt = QueryParams::new().set_opt(&key, Some(value.clone()));
        let via_set = QueryParams::new().set(&key, value);
        prop_assert_eq!(via_opt, via_set);
    }

    /// The final URL is always `base?` followed by exactly the encoded pairs.
    #[test]
    fn prop_url_is_base_separator_encoding(
        base in "https://[a-z]{1,10}\\.example\\.com(/[a-zA-Z_]{1,12}){0,3}",
        pairs in pairs_strategy(),
    ) {
        let params = params_from(&pairs);
        let url = build_query_url(&base, &params);

        prop_assert!(url.starts_with(&base));
        prop_assert_eq!(&url[base.len()..base.len() + 1], "?");
        prop_assert_eq!(&url[base.len() + 1..], params.encode());
    }

    /// Numeric values are sent in plain decimal, never escaped.
    #[test]
    fn prop_numeric_values_use_decimal_display(start_ts in any::<i64>(), week in any::<u32>()) {
        let params = QueryParams::new().set("startTs", start_ts).set("week", week);
        prop_assert_eq!(params.encode(), format!("startTs={start_ts}&week={week}"));
    }
}
