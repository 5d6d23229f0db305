// Nesting limits configured through ParserConfig

use jsontree::{
    parse, parse_nul_terminated_with_config, parse_with_config, try_parse_with_config, ErrKind,
    ParserConfig, DEFAULT_MAX_DEPTH,
};
use test_log::test;

fn nested_arrays(depth: usize) -> Vec<u8> {
    let mut json = vec![b'['; depth];
    json.push(b'1');
    json.extend(std::iter::repeat(b']').take(depth));
    json
}

fn nested_objects(depth: usize) -> Vec<u8> {
    let mut json = Vec::new();
    for _ in 0..depth {
        json.extend_from_slice(br#"{"k":"#);
    }
    json.push(b'0');
    json.extend(std::iter::repeat(b'}').take(depth));
    json
}

#[test]
fn test_default_limit() {
    assert!(!parse(&nested_arrays(DEFAULT_MAX_DEPTH)).is_invalid());
    assert!(parse(&nested_arrays(DEFAULT_MAX_DEPTH + 1)).is_invalid());
    assert!(!parse(&nested_objects(DEFAULT_MAX_DEPTH)).is_invalid());
    assert!(parse(&nested_objects(DEFAULT_MAX_DEPTH + 1)).is_invalid());
}

#[test]
fn test_custom_limit() {
    let config = ParserConfig::new().with_max_depth(4);
    assert!(try_parse_with_config(&nested_arrays(4), &config).is_ok());

    let error = try_parse_with_config(&nested_arrays(5), &config).unwrap_err();
    assert_eq!(error.kind(), ErrKind::MaxDepthReached);
    assert_eq!(error.position(), 4);
    assert_eq!(error.character(), b'[');
}

#[test]
fn test_mixed_nesting() {
    let config = ParserConfig::new().with_max_depth(3);
    assert!(!parse_with_config(br#"{"a": [{"b": 1}]}"#, &config).is_invalid());
    assert!(parse_with_config(br#"{"a": [{"b": []}]}"#, &config).is_invalid());
}

#[test]
fn test_deep_document_within_raised_limit() {
    let config = ParserConfig::new().with_max_depth(256);
    let value = parse_with_config(&nested_arrays(256), &config);

    let mut node = &value;
    let mut levels = 0;
    while let Some(child) = node.get_index(0) {
        node = child;
        levels += 1;
    }
    assert_eq!(levels, 256);
    assert_eq!(node.as_int(), 1);
}

#[test]
fn test_nul_terminated_honours_limit() {
    let config = ParserConfig::new().with_max_depth(2);
    let mut json = nested_arrays(2);
    json.push(0);
    assert!(parse_nul_terminated_with_config(&json, &config).is_ok());

    let mut json = nested_arrays(3);
    json.push(0);
    let error = parse_nul_terminated_with_config(&json, &config).unwrap_err();
    assert_eq!(error.kind(), ErrKind::MaxDepthReached);
    assert_eq!(error.position(), 2);
}
