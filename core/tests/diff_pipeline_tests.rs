//! Format-then-diff pipeline coverage: documents are normalized through
//! the formatters before the line comparison runs.

use devbelt::format::{format_json, format_sql};
use devbelt::{FormatConfig, LineKind, compute_diff};

#[test]
fn json_documents_normalize_then_diff() {
    let config = FormatConfig::default();
    let left = format_json(r#"{"a":1,"b":[1,2]}"#, &config).expect("left formats");
    let right = format_json(r#"{"a":2,"b":[1,2]}"#, &config).expect("right formats");

    let result = compute_diff(&left, &right);
    assert!(result.has_changes());

    let changed_left: Vec<usize> = result
        .left
        .iter()
        .enumerate()
        .filter(|(_, r)| r.kind == LineKind::Removed)
        .map(|(i, _)| i)
        .collect();
    let changed_right: Vec<usize> = result
        .right
        .iter()
        .enumerate()
        .filter(|(_, r)| r.kind == LineKind::Added)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(changed_left, vec![1], "only the \"a\" line differs");
    assert_eq!(changed_right, vec![1]);
    assert!(result.left[1].text.contains("\"a\""));
}

#[test]
fn key_order_is_preserved_not_sorted() {
    let config = FormatConfig::default();
    let formatted = format_json(r#"{"zeta":1,"alpha":2}"#, &config).expect("formats");
    let zeta = formatted.find("zeta").expect("zeta present");
    let alpha = formatted.find("alpha").expect("alpha present");
    assert!(zeta < alpha, "keys keep their input order:\n{formatted}");
}

#[test]
fn equivalent_sql_formats_identically() {
    let config = FormatConfig::default();
    let left = format_sql("select id, name from users where id = 1", &config);
    let right = format_sql("select   id,name\n  from users\nwhere id=1", &config);

    let result = compute_diff(&left, &right);
    assert!(
        !result.has_changes(),
        "whitespace-only SQL variants should normalize to the same text:\n{left}\nvs\n{right}"
    );
}

#[test]
fn invalid_json_blocks_the_pipeline() {
    let config = FormatConfig::default();
    let err = format_json("{ not json", &config).expect_err("should fail");
    assert_eq!(err.code(), devbelt::error_codes::FMT_INVALID_JSON);
}

#[test]
fn swapped_formatted_inputs_swap_roles() {
    let config = FormatConfig::default();
    let left = format_json(r#"{"n":1}"#, &config).expect("left formats");
    let right = format_json(r#"{"n":2}"#, &config).expect("right formats");

    let forward = compute_diff(&left, &right);
    let backward = compute_diff(&right, &left);

    assert_eq!(forward.stats().added, backward.stats().removed);
    assert_eq!(forward.stats().removed, backward.stats().added);
    assert_eq!(forward.left, backward.right);
    assert_eq!(forward.right, backward.left);
}

#[test]
fn uppercase_config_changes_sql_output() {
    let plain = FormatConfig::default();
    let upper = FormatConfig {
        uppercase_keywords: true,
        ..FormatConfig::default()
    };
    let query = "select id from users";

    let lowercase = format_sql(query, &plain);
    let uppercased = format_sql(query, &upper);

    assert!(lowercase.contains("select"));
    assert!(uppercased.contains("SELECT"));
    assert!(compute_diff(&lowercase, &uppercased).has_changes());
}
