//! Ranged read integration tests.

#[cfg(test)]
mod tests {
    use s3shelf_model::input::GetObjectInput;
    use s3shelf_model::types::ContentRange;

    use crate::{cleanup_bucket, create_test_bucket, get_object, provider, put_object};

    const CONTENT: &str = "testcontent";

    fn ranged(range: &str) -> Result<bytes::Bytes, s3shelf_core::S3ServiceError> {
        let provider = provider();
        let bucket = create_test_bucket(&provider, "range");
        put_object(&provider, &bucket, "testobj", CONTENT);
        let result = get_object(&provider, &bucket, "testobj", Some(range));
        cleanup_bucket(&provider, &bucket);
        result
    }

    #[test]
    fn test_should_read_bounded_range() {
        assert_eq!(ranged("bytes=4-7").expect("range"), "cont");
    }

    #[test]
    fn test_should_read_open_ended_range() {
        assert_eq!(ranged("bytes=4-").expect("range"), "content");
    }

    #[test]
    fn test_should_read_suffix_range() {
        assert_eq!(ranged("bytes=-8").expect("range"), "tcontent");
    }

    #[test]
    fn test_should_clamp_range_past_end() {
        assert_eq!(ranged("bytes=4-100").expect("range"), "content");
    }

    #[test]
    fn test_should_reject_unsatisfiable_range() {
        let err = ranged("bytes=40-50").expect_err("beyond end");
        assert_eq!(err.code(), "InvalidRange");
    }

    #[test]
    fn test_should_reject_range_on_empty_object() {
        let provider = provider();
        let bucket = create_test_bucket(&provider, "emptyrange");
        put_object(&provider, &bucket, "empty", "");

        let err = get_object(&provider, &bucket, "empty", Some("bytes=0-")).expect_err("empty");
        assert_eq!(err.code(), "InvalidRange");
        // The whole object is still readable without a range.
        let body = get_object(&provider, &bucket, "empty", None).expect("get");
        assert!(body.is_empty());

        cleanup_bucket(&provider, &bucket);
    }

    #[test]
    fn test_should_report_content_range() {
        let provider = provider();
        let bucket = create_test_bucket(&provider, "contentrange");
        put_object(&provider, &bucket, "testobj", CONTENT);

        let output = provider
            .handle_get_object(GetObjectInput {
                bucket: bucket.clone(),
                key: "testobj".to_owned(),
                range: Some("bytes=-8".to_owned()),
            })
            .expect("ranged get");
        assert_eq!(
            output.content_range,
            Some(ContentRange {
                start: 3,
                end: 10,
                total: 11,
            })
        );
        assert_eq!(output.content_length, Some(8));
        assert_eq!(output.accept_ranges.as_deref(), Some("bytes"));

        cleanup_bucket(&provider, &bucket);
    }
}
