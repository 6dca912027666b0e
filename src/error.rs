use thiserror::Error;

/// A violated precondition or postcondition of a public operation.
///
/// These are programmer errors, not recoverable domain failures (see the
/// error handling design in the crate docs): given a valid [`crate::LUState`]
/// and a well-behaved [`crate::WorkloadOracle`], scheduling always succeeds.
/// Every variant names the offending value so the diagnostic is useful
/// without attaching a debugger.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContractViolation {
    #[error("grade {0} is outside the allowed range 0..=5")]
    GradeOutOfRange(i32),

    #[error("grade {0} is outside the SSRF interval domain -1..=5")]
    SsrfGradeOutOfRange(i32),

    #[error("num_reviews {0} must be >= 1")]
    NumReviewsOutOfRange(i64),

    #[error("avg_grade {0} must be within [0.0, 5.0]")]
    AvgGradeOutOfRange(f64),

    #[error("priority weight {0} is not one of 2.0, 3.0, 4.0")]
    InvalidPriority(f64),

    #[error("difficulty {0} must be >= 0.0")]
    DifficultyOutOfRange(f64),

    #[error("interval {0} must be >= 1")]
    IntervalOutOfRange(i64),

    #[error("min interval {min} exceeds max interval {max}")]
    IntervalWindowInverted { min: i64, max: i64 },

    #[error("oracle returned {actual} workloads for a {expected}-day window, expected {expected}")]
    WorkloadLengthMismatch { expected: usize, actual: usize },

    #[error(
        "oracle returned {actual} average difficulties, expected {expected} (one per workload)"
    )]
    DifficultyLengthMismatch { expected: usize, actual: usize },

    #[error("oracle returned a negative workload: {0}")]
    NegativeWorkload(i64),

    #[error("oracle returned a negative average difficulty: {0}")]
    NegativeAvgDifficulty(f64),

    #[error("oracle returned an empty workload sequence; at least one day is required")]
    EmptyWorkloadRange,

    #[error("load coefficient {0} is outside the allowed range [0.0, 1.0]")]
    LoadCoefficientOutOfRange(f64),
}
