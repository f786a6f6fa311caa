//! Test execution engine.

use std::time::Instant;

use frankenfmt_core::DataModel;

use crate::diff;
use crate::fixtures::{Expected, FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Data model for cases that do not pin one.
    pub data_model: DataModel,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, data_model: DataModel) -> Self {
        Self {
            campaign: campaign.into(),
            data_model,
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.execute_case(case).0)
            .collect()
    }

    /// Like [`run`](Self::run), also emitting one `case_result` entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, entry) = self.execute_case(case);
            log.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }

    fn execute_case(&self, case: &FixtureCase) -> (VerificationResult, LogEntry) {
        let model = case.data_model.unwrap_or(self.data_model);

        let started = Instant::now();
        let outcome = case.family.parse(&case.format, model.sizes());
        let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let got = Expected::from_outcome(&outcome);
        let passed = got == case.expected;
        let expected = case.expected.render();
        let actual = got.render();
        let diff = (!passed).then(|| diff::render_diff(&expected, &actual));

        let mut entry = LogEntry::new(
            String::new(),
            if passed { LogLevel::Info } else { LogLevel::Error },
            "case_result",
        )
        .with_format(case.family, &case.format)
        .with_case(&case.name)
        .with_data_model(model.as_str())
        .with_outcome(if passed { Outcome::Pass } else { Outcome::Fail })
        .with_latency_ns(latency_ns);

        let signature = match &outcome {
            Ok((dirs, args)) => {
                entry = entry.with_counts(dirs.count(), args.len());
                args.signature()
            }
            Err(err) => {
                entry = entry.with_error_code(err.code());
                String::new()
            }
        };
        if let Some(diff) = &diff {
            entry = entry.with_details(serde_json::json!({ "diff": diff }));
        }

        let result = VerificationResult {
            case_name: case.name.clone(),
            family: case.family.as_str().to_string(),
            spec_section: case.spec_section.clone(),
            format: case.format.clone(),
            data_model: model.as_str().to_string(),
            passed,
            expected,
            actual,
            signature,
            diff,
        };
        (result, entry)
    }
}
