use osmrdf_testsuite::evaluator::*;
use osmrdf_testsuite::manifest::TestManifest;
use osmrdf_testsuite::report::TestOutcome;
use std::error::Error;

#[test]
fn fixture_testsuite() -> Result<(), Box<dyn Error>> {
    let manifest = TestManifest::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))?;
    let results = evaluate_conversion_tests(manifest, convert_fixture)?;
    assert!(!results.is_empty());

    let mut errors = Vec::default();
    for result in results {
        if let TestOutcome::Failed { error } = result.outcome {
            errors.push(format!("{}: failed with error {}", result.test, error))
        }
    }

    assert!(errors.is_empty(), "\n{}\n", errors.join("\n"));
    Ok(())
}

#[test]
fn wrong_expectation_is_reported() -> Result<(), Box<dyn Error>> {
    let manifest = TestManifest::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))?;
    let results = evaluate_conversion_tests(manifest, |_, _| Ok(String::new()))?;
    assert!(results
        .iter()
        .all(|result| matches!(result.outcome, TestOutcome::Failed { .. })));
    Ok(())
}
