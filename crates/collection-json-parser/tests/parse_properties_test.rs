//! Property tests for the document parser.

use proptest::prelude::*;

use collection_json_parser::{ParseConfig, UnknownFields, parse};

proptest! {
    #[test]
    fn parse_never_panics(source in ".*") {
        let _ = parse(&source, ParseConfig::default());
    }

    #[test]
    fn documents_without_collection_are_malformed(key in "[a-z]{1,8}", value in any::<i64>()) {
        prop_assume!(key != "collection");
        let source = format!(r#"{{"{key}": {value}}}"#);

        let err = parse(&source, ParseConfig::default()).unwrap_err();
        prop_assert!(err.is_malformed_document());
    }

    #[test]
    fn lenient_parse_warns_once_per_unknown_key(keys in prop::collection::btree_set("x[a-z]{1,6}", 0..5)) {
        let fields: Vec<String> = keys.iter().map(|key| format!(r#""{key}": 1"#)).collect();
        let mut body = vec![r#""version": "1.0""#.to_string()];
        body.extend(fields);
        let source = format!(r#"{{"collection": {{{}}}}}"#, body.join(", "));

        let parsed = parse(&source, ParseConfig::new(UnknownFields::Ignore)).unwrap();
        prop_assert_eq!(parsed.warnings().len(), keys.len());
    }
}
