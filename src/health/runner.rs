//! Runner for orchestrating health checks

use std::time::Instant;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results from running a health check suite
///
/// Counters are derived from the collected results rather than tracked
/// separately.
#[derive(Debug)]
pub struct HealthCheckReport {
    /// Individual check results with their system names
    pub results: Vec<(String, CheckResult)>,
}

impl HealthCheckReport {
    /// Total number of checks run
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing checks
    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    /// Number of checks with warnings
    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    /// Number of failing checks
    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.results
            .iter()
            .filter(|(_, r)| r.status == status)
            .count()
    }

    /// Returns true if all checks passed (no failures)
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// Returns the appropriate exit code for this report
    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else if self.warned() > 0 {
            2
        } else {
            0
        }
    }
}

/// Orchestrates running health checks and collecting results
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    /// Creates a new runner with no checks
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check to the runner
    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks and returns a report
    pub fn run(self) -> HealthCheckReport {
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let name = check.name().to_string();
                let start = Instant::now();
                let result = check.check();
                (name, result.with_duration(start.elapsed()))
            })
            .collect();

        HealthCheckReport { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCheck(CheckStatus);

    impl SystemCheck for FixedCheck {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn check(&self) -> CheckResult {
            match self.0 {
                CheckStatus::Pass => CheckResult::pass("ok"),
                CheckStatus::Warn => CheckResult::warn("meh"),
                CheckStatus::Fail => CheckResult::fail("bad"),
            }
        }
    }

    #[test]
    fn test_report_counts_by_status() {
        let report = HealthCheckRunner::new()
            .add_check(FixedCheck(CheckStatus::Pass))
            .add_check(FixedCheck(CheckStatus::Warn))
            .add_check(FixedCheck(CheckStatus::Fail))
            .run();

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.warned(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_healthy());
    }

    #[test]
    fn test_exit_code_priority() {
        let fail = HealthCheckRunner::new()
            .add_check(FixedCheck(CheckStatus::Warn))
            .add_check(FixedCheck(CheckStatus::Fail))
            .run();
        assert_eq!(fail.exit_code(), 1);

        let warn = HealthCheckRunner::new()
            .add_check(FixedCheck(CheckStatus::Warn))
            .run();
        assert_eq!(warn.exit_code(), 2);

        let pass = HealthCheckRunner::new()
            .add_check(FixedCheck(CheckStatus::Pass))
            .run();
        assert_eq!(pass.exit_code(), 0);
    }

    #[test]
    fn test_runner_records_durations() {
        let report = HealthCheckRunner::new()
            .add_check(FixedCheck(CheckStatus::Pass))
            .run();

        let (name, result) = &report.results[0];
        assert_eq!(name, "Fixed");
        assert!(result.duration >= std::time::Duration::ZERO);
    }
}
