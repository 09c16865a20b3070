/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::symmetry::{check_tables, TableIssue};

#[test]
fn test_known_table_issues() {
    let issues = check_tables();
    let expected = vec![
        TableIssue::MissingNumber {
            hm: "B1a1",
            hall: "B -2yc",
        },
        TableIssue::MissingHm {
            hm: "B1a1",
            hall: "B -2yc",
        },
        TableIssue::MissingNumber {
            hm: "B121/c1",
            hall: "-B 2ybc",
        },
        TableIssue::MissingHm {
            hm: "B121/c1",
            hall: "-B 2ybc",
        },
        TableIssue::MissingNumber {
            hm: "R3mHR",
            hall: "T 3 -2\"",
        },
        TableIssue::MissingHm {
            hm: "R3mHR",
            hall: "T 3 -2\"",
        },
        TableIssue::MissingNumber {
            hm: "R-3mHR",
            hall: "-T 3 2\"",
        },
        TableIssue::MissingHm {
            hm: "R-3mHR",
            hall: "-T 3 2\"",
        },
        TableIssue::HmRoundTrip {
            hall: "F 2 2 -1d",
            hm: "Fddd:1",
            resolved: "-F 2 2 -1d",
        },
    ];
    assert_eq!(issues, expected);
}

#[test]
fn test_issue_messages() {
    let issue = TableIssue::HmRoundTrip {
        hall: "F 2 2 -1d",
        hm: "Fddd:1",
        resolved: "-F 2 2 -1d",
    };
    assert_eq!(
        issue.to_string(),
        "'F 2 2 -1d' -> Fddd:1 resolves back to '-F 2 2 -1d'"
    );
}
