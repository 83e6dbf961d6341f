//! Integration tests for keydecomp.

use std::io::Write;
use tempfile::NamedTempFile;

use keydecomp::{
    DecomposerConfig, KeyCheck, KeyDecomposer, KeyError, Normalization, ParserConfig, StopReason,
    Table, find_minimal_key, unique_columns,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// File Loading
// =============================================================================

#[test]
fn test_decompose_csv_file() {
    let content = "id,dept,name\n\
                   1,A,Bob\n\
                   2,A,Ann\n\
                   3,B,Bob\n\
                   4,B,Ann\n";
    let file = create_test_file(content);

    let report = KeyDecomposer::new()
        .decompose_file(file.path())
        .expect("Decomposition failed");

    assert_eq!(report.key, vec!["id"]);
    assert!(report.verified);

    let source = report.source.expect("source metadata");
    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 4);
    assert_eq!(source.column_count, 3);
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_decompose_tsv_auto_detect() {
    let content = "sample\tvisit\tdiagnosis\n\
                   S001\t1\tCD\n\
                   S001\t2\tCD\n\
                   S002\t1\tCD\n\
                   S002\t2\tCD\n";
    let file = create_test_file(content);

    let report = KeyDecomposer::new()
        .decompose_file(file.path())
        .expect("Decomposition failed");

    assert_eq!(report.source.as_ref().unwrap().format, "tsv");
    assert_eq!(report.key, vec!["sample", "visit"]);
    assert_eq!(report.stop, StopReason::AllLocked);
}

#[test]
fn test_missing_file() {
    let err = KeyDecomposer::new()
        .decompose_file("/nonexistent/table.csv")
        .unwrap_err();

    assert!(matches!(err, KeyError::Io { .. }));
}

#[test]
fn test_header_only_file() {
    let file = create_test_file("a,b,c\n");

    let report = KeyDecomposer::new()
        .decompose_file(file.path())
        .expect("Decomposition failed");

    assert_eq!(report.distinct_rows, 0);
    assert_eq!(report.key.len(), 1);
}

#[test]
fn test_explicit_delimiter_and_no_header() {
    let file = create_test_file("x|1\nx|2\ny|1\n");
    let decomposer = KeyDecomposer::with_config(DecomposerConfig {
        parser: ParserConfig {
            delimiter: Some(b'|'),
            has_header: false,
            ..ParserConfig::default()
        },
        ..DecomposerConfig::default()
    });

    let report = decomposer.decompose_file(file.path()).unwrap();

    assert_eq!(report.key, vec!["column_1", "column_2"]);
}

// =============================================================================
// Key Properties
// =============================================================================

#[test]
fn test_duplicate_rows_do_not_block_key() {
    let table = Table::from_text(
        ["id", "value"],
        [["1", "a"], ["1", "a"], ["2", "b"], ["3", "b"]],
    );

    assert_eq!(find_minimal_key(&table).unwrap(), vec!["id"]);
}

#[test]
fn test_all_columns_required() {
    // Every column is binary; only the full triple is unique.
    let table = Table::from_text(
        ["a", "b", "c"],
        [
            ["0", "0", "0"],
            ["0", "1", "1"],
            ["1", "0", "1"],
            ["1", "1", "0"],
            ["0", "0", "1"],
        ],
    );

    let key = find_minimal_key(&table).unwrap();
    assert_eq!(key, vec!["a", "b", "c"]);

    let check = KeyCheck::run(&table, &key).unwrap();
    assert!(check.is_minimal());
}

#[test]
fn test_nulls_do_not_count_as_values() {
    // `code` has only one real value besides nulls, so `seq` outranks it.
    let table = Table::from_text(
        ["code", "seq"],
        [["", "1"], ["NA", "2"], ["X", "3"], ["", "4"]],
    );
    let report = KeyDecomposer::new().decompose_table(&table).unwrap();

    assert_eq!(report.weights.get_index(0).unwrap().0, "seq");
    assert_eq!(report.key, vec!["seq"]);
}

#[test]
fn test_result_is_deterministic() {
    let table = Table::from_text(
        ["region", "store", "day", "clerk"],
        [
            ["N", "1", "mon", "ann"],
            ["N", "1", "tue", "bob"],
            ["N", "2", "mon", "ann"],
            ["S", "3", "mon", "cat"],
            ["S", "3", "tue", "cat"],
        ],
    );

    let first = find_minimal_key(&table).unwrap();
    for _ in 0..5 {
        assert_eq!(find_minimal_key(&table).unwrap(), first);
    }
}

#[test]
fn test_normalizations_both_yield_keys() {
    let table = Table::from_text(
        ["a", "b", "c"],
        [["1", "x", "p"], ["2", "x", "q"], ["2", "y", "p"], ["3", "y", "q"]],
    );

    for normalization in [Normalization::MaxCardinality, Normalization::RowCount] {
        let decomposer = KeyDecomposer::with_config(DecomposerConfig {
            normalization,
            ..DecomposerConfig::default()
        });
        let report = decomposer.decompose_table(&table).unwrap();

        assert!(report.verified);
        assert!(KeyCheck::run(&table, &report.key).unwrap().is_minimal());
    }
}

#[test]
fn test_unique_columns_lists_single_column_keys() {
    let table = Table::from_text(
        ["id", "email", "team"],
        [["1", "a@x", "red"], ["2", "b@x", "red"], ["3", "c@x", "blue"]],
    );

    assert_eq!(unique_columns(&table).unwrap(), vec!["id", "email"]);
}
