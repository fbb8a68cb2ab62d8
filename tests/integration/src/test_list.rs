//! List objects integration tests.

#[cfg(test)]
mod tests {
    use s3shelf_model::input::ListObjectsV2Input;

    use crate::{ListParams, cleanup_bucket, keys, list_objects, prefixes, provider, setup_objects};

    const FLAT: [&str; 4] = ["bar", "baz", "cab", "foo"];

    // -----------------------------------------------------------------------
    // max-keys
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_paginate_with_max_keys_two() {
        let provider = provider();
        let bucket = setup_objects(&provider, "many", &["foo", "bar", "baz"]);

        let page = list_objects(
            &provider,
            &bucket,
            ListParams {
                max_keys: Some(2),
                ..Default::default()
            },
        )
        .expect("list");
        assert_eq!(keys(&page), vec!["bar", "baz"]);
        assert_eq!(page.is_truncated, Some(true));

        let page = list_objects(
            &provider,
            &bucket,
            ListParams {
                marker: Some("baz"),
                ..Default::default()
            },
        )
        .expect("list");
        assert_eq!(keys(&page), vec!["foo"]);
        assert_eq!(page.is_truncated, Some(false));

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_default_to_configured_max_keys() {
        let provider = provider();
        let bucket = setup_objects(&provider, "maxnone", &["key1", "key2", "key3"]);

        let page = list_objects(&provider, &bucket, ListParams::default()).expect("list");
        assert_eq!(keys(&page), vec!["key1", "key2", "key3"]);
        let configured = i32::try_from(provider.config().default_max_keys).unwrap_or(i32::MAX);
        assert_eq!(page.max_keys, Some(configured));
        assert_eq!(page.is_truncated, Some(false));

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_return_no_keys_for_zero_max_keys() {
        let provider = provider();
        let bucket = setup_objects(&provider, "maxzero", &["key1", "key2", "key3"]);

        let page = list_objects(
            &provider,
            &bucket,
            ListParams {
                max_keys: Some(0),
                ..Default::default()
            },
        )
        .expect("list");
        assert!(keys(&page).is_empty());
        assert!(page.common_prefixes.is_empty());
        // Keys remain beyond the empty page.
        assert_eq!(page.is_truncated, Some(true));
        assert!(page.next_marker.is_none());

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_paginate_with_max_keys_one() {
        let provider = provider();
        let bucket = setup_objects(&provider, "maxone", &["key1", "key2", "key3"]);

        let page = list_objects(
            &provider,
            &bucket,
            ListParams {
                max_keys: Some(1),
                ..Default::default()
            },
        )
        .expect("list");
        assert_eq!(keys(&page), vec!["key1"]);
        assert_eq!(page.is_truncated, Some(true));
        assert_eq!(page.next_marker.as_deref(), Some("key1"));

        let page = list_objects(
            &provider,
            &bucket,
            ListParams {
                marker: Some("key1"),
                ..Default::default()
            },
        )
        .expect("list");
        assert_eq!(keys(&page), vec!["key2", "key3"]);
        assert_eq!(page.is_truncated, Some(false));

        cleanup_bucket(&provider, &bucket);
    }

    // -----------------------------------------------------------------------
    // Prefix and delimiter together
    // -----------------------------------------------------------------------

    fn list_with(
        provider: &s3shelf_core::S3Provider,
        bucket: &str,
        prefix: Option<&str>,
        delimiter: Option<&str>,
    ) -> s3shelf_model::output::ListObjectsOutput {
        list_objects(
            provider,
            bucket,
            ListParams {
                prefix,
                delimiter,
                ..Default::default()
            },
        )
        .unwrap_or_else(|e| panic!("list failed: {e}"))
    }

    #[test]
    fn test_should_find_nothing_with_unmatched_prefix_and_delimiter() {
        let provider = provider();
        let bucket = setup_objects(&provider, "pdnone", &["b/a/c", "b/a/g", "b/a/r", "g"]);

        for (prefix, delimiter) in [("y", "z"), ("d", "/")] {
            let page = list_with(&provider, &bucket, Some(prefix), Some(delimiter));
            assert!(keys(&page).is_empty());
            assert!(prefixes(&page).is_empty());
        }

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_stop_treating_slash_as_delimiter_when_overridden() {
        let provider = provider();
        let bucket = setup_objects(&provider, "pdz", &["b/a/c", "b/a/g", "b/a/r", "golffie"]);

        let page = list_with(&provider, &bucket, Some("b"), Some("z"));
        assert_eq!(keys(&page), vec!["b/a/c", "b/a/g", "b/a/r"]);
        assert!(prefixes(&page).is_empty());

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_group_with_non_slash_prefix_and_delimiter() {
        let provider = provider();
        let bucket = setup_objects(&provider, "pdalt", &["bar", "bazar", "cab", "foo"]);

        let page = list_with(&provider, &bucket, Some("ba"), Some("a"));
        assert_eq!(page.prefix.as_deref(), Some("ba"));
        assert_eq!(page.delimiter.as_deref(), Some("a"));
        assert_eq!(keys(&page), vec!["bar"]);
        assert_eq!(prefixes(&page), vec!["baza"]);

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_return_objects_directly_under_prefix() {
        let provider = provider();
        let names = ["foo/bar", "foo/baz/xyzzy", "quux/thud"];
        let bucket = setup_objects(&provider, "pdbasic", &names);

        let page = list_with(&provider, &bucket, Some("foo/"), Some("/"));
        assert_eq!(page.prefix.as_deref(), Some("foo/"));
        assert_eq!(page.delimiter.as_deref(), Some("/"));
        assert_eq!(keys(&page), vec!["foo/bar"]);
        assert_eq!(prefixes(&page), vec!["foo/baz/"]);

        cleanup_bucket(&provider, &bucket);
    }

    // -----------------------------------------------------------------------
    // Prefix only
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_accept_unreadable_prefix() {
        let provider = provider();
        let names = ["foo/bar", "foo/baz/xyzzy", "quux/thud"];
        let bucket = setup_objects(&provider, "punread", &names);

        let page = list_with(&provider, &bucket, Some("\x0a"), None);
        assert_eq!(page.prefix.as_deref(), Some("\x0a"));
        assert!(keys(&page).is_empty());
        assert!(prefixes(&page).is_empty());

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_filter_by_prefix() {
        let provider = provider();
        let bucket = setup_objects(&provider, "prefix", &["foo/bar", "foo/baz", "quux"]);

        let cases: [(Option<&str>, Vec<&str>); 4] = [
            (Some("d"), vec![]),
            (None, vec!["foo/bar", "foo/baz", "quux"]),
            (Some(""), vec!["foo/bar", "foo/baz", "quux"]),
            (Some("foo/"), vec!["foo/bar", "foo/baz"]),
        ];
        for (prefix, expected) in cases {
            let page = list_with(&provider, &bucket, prefix, None);
            assert_eq!(page.prefix.as_deref(), prefix);
            assert_eq!(keys(&page), expected, "prefix {prefix:?}");
            assert!(prefixes(&page).is_empty());
        }

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_filter_by_prefix_without_delimiter() {
        let provider = provider();
        let bucket = setup_objects(&provider, "palt", &["bar", "baz", "foo"]);

        let page = list_with(&provider, &bucket, Some("ba"), None);
        assert_eq!(keys(&page), vec!["bar", "baz"]);
        assert!(prefixes(&page).is_empty());

        cleanup_bucket(&provider, &bucket);
    }

    // -----------------------------------------------------------------------
    // Delimiter only
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_not_group_on_absent_delimiters() {
        let provider = provider();
        let bucket = setup_objects(&provider, "dabsent", &FLAT);

        for delimiter in ["/", " ", "\x0a"] {
            let page = list_with(&provider, &bucket, None, Some(delimiter));
            assert_eq!(page.delimiter.as_deref(), Some(delimiter));
            assert_eq!(keys(&page), FLAT.to_vec());
            assert!(prefixes(&page).is_empty());
        }

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_group_on_special_character_delimiters() {
        let provider = provider();
        for delimiter in [".", "%", " "] {
            let names: Vec<String> = ["bXar", "bXaz", "cXab", "foo"]
                .iter()
                .map(|k| k.replace('X', delimiter))
                .collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let bucket = setup_objects(&provider, "dspecial", &names);

            let page = list_with(&provider, &bucket, None, Some(delimiter));
            assert_eq!(keys(&page), vec!["foo"]);
            assert_eq!(
                prefixes(&page),
                vec![format!("b{delimiter}"), format!("c{delimiter}")]
            );

            cleanup_bucket(&provider, &bucket);
        }
    }

    #[test]
    fn test_should_group_on_letter_delimiter() {
        let provider = provider();
        let bucket = setup_objects(&provider, "dalt", &FLAT);

        let page = list_with(&provider, &bucket, None, Some("a"));
        assert_eq!(keys(&page), vec!["foo"]);
        assert_eq!(prefixes(&page), vec!["ba", "ca"]);

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_group_multi_component_names() {
        let provider = provider();
        let bucket = setup_objects(
            &provider,
            "dbasic",
            &["foo/bar", "foo/baz/xyzzy", "quux/thud", "asdf"],
        );

        let page = list_with(&provider, &bucket, None, Some("/"));
        assert_eq!(keys(&page), vec!["asdf"]);
        assert_eq!(prefixes(&page), vec!["foo/", "quux/"]);

        cleanup_bucket(&provider, &bucket);
    }

    // -----------------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------------

    fn list_after(
        provider: &s3shelf_core::S3Provider,
        bucket: &str,
        marker: Option<&str>,
    ) -> s3shelf_model::output::ListObjectsOutput {
        list_objects(
            provider,
            bucket,
            ListParams {
                marker,
                ..Default::default()
            },
        )
        .unwrap_or_else(|e| panic!("list failed: {e}"))
    }

    #[test]
    fn test_should_resume_from_markers() {
        let provider = provider();
        let bucket = setup_objects(&provider, "marker", &["bar", "baz", "quux"]);

        let cases: [(Option<&str>, Vec<&str>); 6] = [
            (Some("aaa"), vec!["bar", "baz", "quux"]),
            (Some("zzz"), vec![]),
            (Some("blah"), vec!["quux"]),
            (Some("\x0a"), vec!["bar", "baz", "quux"]),
            (Some(""), vec!["bar", "baz", "quux"]),
            (None, vec!["bar", "baz", "quux"]),
        ];
        for (marker, expected) in cases {
            let page = list_after(&provider, &bucket, marker);
            assert_eq!(page.marker.as_deref(), marker);
            assert_eq!(keys(&page), expected, "marker {marker:?}");
            assert_eq!(page.is_truncated, Some(false));
        }

        cleanup_bucket(&provider, &bucket);
    }

    // -----------------------------------------------------------------------
    // Full pagination
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_reassemble_listing_from_v2_pages() {
        let provider = provider();
        let names = [
            "a/1", "a/2", "a/3", "b", "c/x/1", "c/y", "d", "e/1", "e/2", "f",
        ];
        let bucket = setup_objects(&provider, "pages", &names);

        let full = provider
            .handle_list_objects_v2(ListObjectsV2Input {
                bucket: bucket.clone(),
                delimiter: Some("/".to_owned()),
                ..Default::default()
            })
            .expect("full listing");
        let expected_keys: Vec<String> = full
            .contents
            .iter()
            .filter_map(|o| o.key.clone())
            .collect();
        let expected_prefixes: Vec<String> = full
            .common_prefixes
            .iter()
            .filter_map(|p| p.prefix.clone())
            .collect();
        assert_eq!(expected_keys, vec!["b", "d", "f"]);
        assert_eq!(expected_prefixes, vec!["a/", "c/", "e/"]);

        let mut got_keys = Vec::new();
        let mut got_prefixes = Vec::new();
        let mut token = None;
        loop {
            let page = provider
                .handle_list_objects_v2(ListObjectsV2Input {
                    bucket: bucket.clone(),
                    delimiter: Some("/".to_owned()),
                    max_keys: Some(2),
                    continuation_token: token.take(),
                    ..Default::default()
                })
                .expect("page");
            assert!(page.key_count.unwrap_or_default() <= 2);
            got_keys.extend(page.contents.iter().filter_map(|o| o.key.clone()));
            got_prefixes.extend(page.common_prefixes.iter().filter_map(|p| p.prefix.clone()));
            if page.is_truncated != Some(true) {
                break;
            }
            token = page.next_continuation_token;
        }
        assert_eq!(got_keys, expected_keys);
        assert_eq!(got_prefixes, expected_prefixes);

        cleanup_bucket(&provider, &bucket);
    }
}
