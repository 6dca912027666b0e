use chrono::{DateTime, Utc};

use crate::error::ContractViolation;
use crate::grade::Grade;
use crate::priority::Priority;
use crate::status::LUStatus;

/// Per-learning-unit scheduling state.
///
/// `T` is the host's back-reference to the actual learning unit (a flash
/// card id, a database row key, whatever the host finds convenient) — the
/// scheduler never inspects it, so it is carried as a plain type parameter
/// rather than erased behind a trait object.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LUState<T = ()> {
    pub opaque_ref: T,
    pub grade: Grade,
    pub num_reviews: u32,
    pub avg_grade: f64,
    pub priority: Priority,
    pub difficulty: f64,
    pub status: LUStatus,
    pub last_review: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
}

impl<T> LUState<T> {
    /// Builds a freshly introduced item in its initial state (§4.5):
    /// `grade = 0`, `num_reviews = 1`, `avg_grade = 2.5`, `priority = Mid`,
    /// `difficulty = 0.0`, `status = Memorized`, with no review history yet.
    pub fn new(opaque_ref: T) -> Self {
        LUState {
            opaque_ref,
            grade: Grade::new(0).expect("0 is within the valid grade range"),
            num_reviews: 1,
            avg_grade: 2.5,
            priority: Priority::Mid,
            difficulty: 0.0,
            status: LUStatus::Memorized,
            last_review: None,
            next_review: None,
        }
    }

    /// Checks the §3.4 invariants that are not already enforced by the type
    /// system (`grade` and `priority` cannot be out of range once
    /// constructed; `num_reviews`, `avg_grade` and `difficulty` are plain
    /// numbers and need an explicit check).
    pub fn validate(&self) -> Result<(), ContractViolation> {
        if self.num_reviews < 1 {
            return Err(ContractViolation::NumReviewsOutOfRange(
                self.num_reviews as i64,
            ));
        }
        if !(0.0..=5.0).contains(&self.avg_grade) {
            return Err(ContractViolation::AvgGradeOutOfRange(self.avg_grade));
        }
        if self.difficulty < 0.0 {
            return Err(ContractViolation::DifficultyOutOfRange(self.difficulty));
        }
        Ok(())
    }
}
