// Test complete flow of the scanner over whole documents
// Run with `cargo test --test e2e_test`
//
// Every json file in the data directory is a script for the document in the `.input` file with
// the same base name. The script plays the role of the grammar: a `grammar` step skips a literal
// the grammar matches itself, a scan step calls the scanner with the admissible token kinds and
// checks the outcome.

use std::fs;

use regex::Regex;
use serde::Deserialize;
use wxml_scanner::{Scanner, TokenKind, ValidSymbols};

#[derive(Debug, Deserialize)]
struct ExpectedToken {
    kind: TokenKind,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    Grammar {
        grammar: String,
    },
    Scan {
        valid: Vec<TokenKind>,
        token: Option<ExpectedToken>,
    },
}

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Initialize the regex for newlines. It is used to make the tests platform independent.
    let rx_newline: Regex = Regex::new(r"\r?\n|\r").unwrap();

    let scanner = Scanner::new();
    let mut scripts = 0;

    // Iterate over all json files in the data directory that contain scan scripts
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "json" {
            continue;
        }

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        // Read the json file
        let file = fs::File::open(&path).unwrap();
        let steps: Vec<Step> = serde_json::from_reader(file)
            .unwrap_or_else(|e| panic!("**** Failed to read json file {}: {}", path.display(), e));

        // Open the input file which has the same base name as the json file but with a .input
        // extension.
        let input_path = path.with_extension("input");
        let input = fs::read_to_string(&input_path).unwrap();
        let input = rx_newline.replace_all(&input, "\n");

        let mut offset = 0;
        for (index, step) in steps.into_iter().enumerate() {
            match step {
                Step::Grammar { grammar } => {
                    let rest = &input[offset..];
                    let trimmed = rest.trim_start();
                    assert!(
                        trimmed.starts_with(&grammar),
                        "{}, step {}: expected grammar literal {:?} at {:?}",
                        path.display(),
                        index,
                        grammar,
                        trimmed
                    );
                    offset += rest.len() - trimmed.len() + grammar.len();
                }
                Step::Scan { valid, token } => {
                    let valid: ValidSymbols = valid.into_iter().collect();
                    let result = scanner.scan_str(&input, offset, &valid).unwrap();
                    match (result, token) {
                        (Some(ma), Some(expected)) => {
                            println!("{}, Ty: {}", &input[ma.range()], ma.kind());
                            assert_eq!(
                                expected.kind,
                                ma.kind(),
                                "{}, step {}",
                                path.display(),
                                index
                            );
                            assert_eq!(
                                expected.text,
                                &input[ma.range()],
                                "{}, step {}",
                                path.display(),
                                index
                            );
                            offset = ma.end();
                        }
                        (None, None) => {}
                        (result, expected) => panic!(
                            "{}, step {}: scanned {:?}, expected {:?}",
                            path.display(),
                            index,
                            result,
                            expected
                        ),
                    }
                }
            }
        }

        assert!(
            input[offset..].trim().is_empty(),
            "{}: unconsumed input {:?}",
            path.display(),
            &input[offset..]
        );
        scripts += 1;
    }

    assert!(scripts > 0, "no scan scripts found");
}
