use log::trace;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const INPUT_EXTENSION: &str = ".osm";
const NEGATIVE_SUFFIX: &str = ".bad.osm";
const RESULT_EXTENSION: &str = "ttl";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TestKind {
    /// The conversion must succeed and give exactly the result file
    PositiveConversion,
    /// The conversion must fail
    NegativeConversion,
}

pub struct Test {
    pub id: String,
    pub kind: TestKind,
    pub action: PathBuf,
    pub result: Option<PathBuf>,
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} on file \"{}\"", self.kind, self.id, self.action.display())?;
        for result in &self.result {
            write!(f, " with result \"{}\"", result.display())?;
        }
        Ok(())
    }
}

/// The tests of a fixture directory, in file name order.
///
/// Every `name.osm` file is a positive test whose expected output is `name.ttl`.
/// Every `name.bad.osm` file is a negative test.
pub struct TestManifest {
    tests_to_do: Vec<PathBuf>,
}

impl TestManifest {
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, io::Error> {
        let mut tests_to_do = Vec::default();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if file_name(&path).ends_with(INPUT_EXTENSION) {
                tests_to_do.push(path);
            } else {
                trace!("Skipping fixture file {}", path.display());
            }
        }
        // Popped from the end
        tests_to_do.sort();
        tests_to_do.reverse();
        Ok(Self { tests_to_do })
    }
}

impl Iterator for TestManifest {
    type Item = Result<Test, Box<dyn Error>>;

    fn next(&mut self) -> Option<Result<Test, Box<dyn Error>>> {
        let action = self.tests_to_do.pop()?;
        let name = file_name(&action);
        if let Some(id) = name.strip_suffix(NEGATIVE_SUFFIX) {
            return Some(Ok(Test {
                id: id.to_owned(),
                kind: TestKind::NegativeConversion,
                action,
                result: None,
            }));
        }
        let id = name.trim_end_matches(INPUT_EXTENSION).to_owned();
        let result = action.with_extension(RESULT_EXTENSION);
        if !result.is_file() {
            return Some(Err(Box::new(TestManifestError::InvalidTestResult(id))));
        }
        Some(Ok(Test {
            id,
            kind: TestKind::PositiveConversion,
            action,
            result: Some(result),
        }))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub enum TestManifestError {
    InvalidTestResult(String),
}

impl fmt::Display for TestManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            TestManifestError::InvalidTestResult(t) => {
                write!(f, "The test {} has no .{} result file", t, RESULT_EXTENSION)
            }
        }
    }
}

impl Error for TestManifestError {}
