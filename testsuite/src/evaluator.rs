use crate::manifest::{Test, TestKind, TestManifestError};
use crate::report::{TestOutcome, TestResult};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub fn evaluate_conversion_tests(
    manifest: impl Iterator<Item = Result<Test, Box<dyn Error>>>,
    convert: impl Fn(&str, &str) -> Result<String, Box<dyn Error>>,
) -> Result<Vec<TestResult>, Box<dyn Error>> {
    manifest
        .map(|test| {
            let test = test?;
            let input = read_fixture(&test.action)?;
            let outcome = match test.kind {
                TestKind::PositiveConversion => {
                    let result = test
                        .result
                        .as_ref()
                        .ok_or_else(|| TestManifestError::InvalidTestResult(test.id.clone()))?;
                    let expected = read_fixture(result)?;
                    match convert(&test.id, &input) {
                        Ok(actual) if actual == expected => TestOutcome::Passed,
                        Ok(actual) => TestOutcome::Failed {
                            error: format!(
                                "The conversion result is not the expected one. Expected:\n{}\nActual:\n{}",
                                expected, actual
                            ),
                        },
                        Err(e) => TestOutcome::Failed {
                            error: format!("Conversion error on file {}: {}", test.action.display(), e),
                        },
                    }
                }
                TestKind::NegativeConversion => match convert(&test.id, &input) {
                    Ok(_) => TestOutcome::Failed {
                        error: "file converted without error even if it should not".to_owned(),
                    },
                    Err(_) => TestOutcome::Passed,
                },
            };
            Ok(TestResult {
                test: test.id,
                outcome,
            })
        })
        .collect()
}

/// Converts a fixture with the entry point named by the prefix of its test id (`node`, `way` or `relation`).
pub fn convert_fixture(id: &str, xml: &str) -> Result<String, Box<dyn Error>> {
    Ok(if id.starts_with("way") {
        osmrdf::way_xml_to_turtle(xml)?
    } else if id.starts_with("relation") {
        osmrdf::relation_xml_to_turtle(xml)?
    } else {
        osmrdf::node_xml_to_turtle(xml)?
    })
}

pub fn read_fixture(path: &Path) -> Result<String, TestEvaluationError> {
    fs::read_to_string(path)
        .map_err(|e| TestEvaluationError::IO(path.to_string_lossy().to_string(), e))
}

#[derive(Debug)]
pub enum TestEvaluationError {
    IO(String, io::Error),
}

impl fmt::Display for TestEvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            TestEvaluationError::IO(file, error) => {
                write!(f, "I/O error on file {}: {}", file, error)
            }
        }
    }
}

impl Error for TestEvaluationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TestEvaluationError::IO(_, error) => Some(error),
        }
    }
}
