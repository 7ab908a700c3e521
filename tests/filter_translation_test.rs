use sagitta::query::{
    Condition, FilterValue, MetadataFilter, MetadataFilters, VectorStoreQuery, build_query_filter,
};

#[test]
fn test_build_query_filter_returns_none() {
    let query = VectorStoreQuery::default();
    assert!(build_query_filter(&query).is_none());
}

#[test]
fn test_build_query_filter_returns_match_any() {
    let query = VectorStoreQuery::new().with_doc_ids(vec![
        "1".to_string(),
        "2".to_string(),
        "3".to_string(),
    ]);

    let filter = build_query_filter(&query).expect("filter should be produced");

    assert_eq!(filter.len(), 1);
    match &filter.must[0] {
        Condition::AnyOf { key, values } => {
            assert_eq!(key, "doc_id");
            assert_eq!(values, &["1", "2", "3"]);
        }
        other => panic!("expected any-of condition, got {other:?}"),
    }
}

#[test]
fn test_build_query_filter_returns_empty_filter_on_query_str() {
    let query = VectorStoreQuery::new().with_query_str("lorem");

    let filter = build_query_filter(&query).expect("filter should be produced");

    assert_eq!(filter.len(), 0);
    assert!(filter.is_empty());
}

#[test]
fn test_build_query_filter_returns_combined_filter() {
    let filters = MetadataFilters::new(vec![
        MetadataFilter::new("text_field", "text_value"),
        MetadataFilter::new("int_field", 4i64),
        MetadataFilter::new("float_field", 3.5),
    ]);
    let query = VectorStoreQuery::new()
        .with_doc_ids(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        .with_filters(filters);

    let filter = build_query_filter(&query).expect("filter should be produced");

    assert_eq!(filter.len(), 4);

    match &filter.must[0] {
        Condition::AnyOf { key, values } => {
            assert_eq!(key, "doc_id");
            assert_eq!(values, &["1", "2", "3"]);
        }
        other => panic!("expected any-of condition, got {other:?}"),
    }

    match &filter.must[1] {
        Condition::Equals { key, value } => {
            assert_eq!(key, "text_field");
            assert_eq!(value, &FilterValue::Str("text_value".to_string()));
        }
        other => panic!("expected equals condition, got {other:?}"),
    }

    match &filter.must[2] {
        Condition::Equals { key, value } => {
            assert_eq!(key, "int_field");
            assert_eq!(value, &FilterValue::Int(4));
        }
        other => panic!("expected equals condition, got {other:?}"),
    }

    match &filter.must[3] {
        Condition::Range { key, gte, lte } => {
            assert_eq!(key, "float_field");
            assert_eq!(*gte, 3.5);
            assert_eq!(*lte, 3.5);
        }
        other => panic!("expected range condition, got {other:?}"),
    }
}

#[test]
fn test_metadata_filters_without_doc_ids_still_produce_filter() {
    let filters = MetadataFilters::new(vec![MetadataFilter::new("author", "Stephen King")]);
    let query = VectorStoreQuery::new().with_filters(filters);

    let filter = build_query_filter(&query).expect("filter should be produced");
    assert_eq!(filter.len(), 1);
    assert_eq!(filter.must[0].key(), "author");
}

#[test]
fn test_unsupported_json_values_fail_with_key_and_kind() {
    let err = MetadataFilter::from_json("flag", &serde_json::json!(true)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported filter value for key 'flag': boolean"
    );

    let err = MetadataFilter::from_json("missing", &serde_json::Value::Null).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported filter value for key 'missing': null"
    );

    let err = MetadataFilter::from_json("nested", &serde_json::json!({"a": 1})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported filter value for key 'nested': object"
    );
}

#[test]
fn test_json_boundary_accepts_supported_values() {
    let filters: Vec<MetadataFilter> = [
        ("text_field", serde_json::json!("text_value")),
        ("int_field", serde_json::json!(4)),
        ("float_field", serde_json::json!(3.5)),
    ]
    .iter()
    .map(|(key, value)| MetadataFilter::from_json(*key, value))
    .collect::<Result<_, _>>()
    .expect("all values are supported");

    assert_eq!(filters[0].value, FilterValue::Str("text_value".to_string()));
    assert_eq!(filters[1].value, FilterValue::Int(4));
    assert_eq!(filters[2].value, FilterValue::Float(3.5));
}

#[test]
fn test_filter_serializes_to_must_conjunction() {
    let filters = MetadataFilters::new(vec![MetadataFilter::new("rating", 3.5)]);
    let query = VectorStoreQuery::new()
        .with_doc_ids(vec!["1".to_string()])
        .with_filters(filters);

    let filter = build_query_filter(&query).expect("filter should be produced");
    let value = serde_json::to_value(&filter).expect("filter serializes");

    assert_eq!(
        value,
        serde_json::json!({
            "must": [
                {"any_of": {"key": "doc_id", "values": ["1"]}},
                {"range": {"key": "rating", "gte": 3.5, "lte": 3.5}},
            ]
        })
    );
}
