use osmrdf_testsuite::evaluator::*;
use osmrdf_testsuite::manifest::TestManifest;
use osmrdf_testsuite::report::TestOutcome;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Expecting one argument: <fixtures_directory>");
        return;
    }

    let manifest = match TestManifest::new(&args[1]) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match evaluate_conversion_tests(manifest, convert_fixture) {
        Ok(results) => {
            for result in results {
                match result.outcome {
                    TestOutcome::Passed => println!("{}: passed", result.test),
                    TestOutcome::Failed { error } => {
                        println!("{}: failed with error {}", result.test, error)
                    }
                }
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}
