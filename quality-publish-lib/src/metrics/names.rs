//! Wire names of every metric the aggregator can produce.

pub const TESTS: &str = "tests";
pub const TEST_FAILURES: &str = "test_failures";
pub const TEST_ERRORS: &str = "test_errors";
pub const TEST_SUCCESS_DENSITY: &str = "test_success_density";

pub const BLOCKER_VIOLATIONS: &str = "blocker_violations";
pub const CRITICAL_VIOLATIONS: &str = "critical_violations";
pub const MAJOR_VIOLATIONS: &str = "major_violations";
pub const VIOLATIONS: &str = "violations";

pub const TOTAL_LINES_COVERED: &str = "total_lines_covered";
pub const TOTAL_LINES_MISSED: &str = "total_lines_missed";
pub const TOTAL_INSTRUCTIONS_COVERED: &str = "total_instructions_covered";
pub const TOTAL_INSTRUCTIONS_MISSED: &str = "total_instructions_missed";

/// Derived from the line counters.
pub const LINE_COVERAGE: &str = "line_coverage";

/// Derived from the instruction counters.
pub const COVERAGE: &str = "coverage";
