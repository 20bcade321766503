#[derive(Debug, Clone)]
pub struct TestResult {
    pub test: String,
    pub outcome: TestOutcome,
}

#[derive(Debug, Clone)]
pub enum TestOutcome {
    Passed,
    Failed { error: String },
}
