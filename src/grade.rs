use crate::error::ContractViolation;

/// A first-attempt grade for a single review, in `{0,1,2,3,4,5}`.
///
/// | Grade | Meaning | Class |
/// |---|---|---|
/// | 5 | instantly recalled | recall |
/// | 4 | slowly recalled | recall |
/// | 3 | partially recalled | recall |
/// | 2 | instantly recognised | recognition |
/// | 1 | slowly recognised | recognition |
/// | 0 | not recognised | recognition |
///
/// Grades `{0,1,2}` are *final-drill* grades; `{3,4,5}` are *memorised*
/// grades. The valid range is enforced at construction, so once a `Grade`
/// exists it never needs revalidating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    /// Constructs a grade, rejecting anything outside `0..=5`.
    pub fn new(value: u8) -> Result<Self, ContractViolation> {
        if value > Self::MAX {
            return Err(ContractViolation::GradeOutOfRange(value as i32));
        }
        Ok(Grade(value))
    }

    /// Constructs a grade from a signed value, the validation boundary for
    /// hosts that store grades as plain integers (and so might hand us a
    /// negative one). Rejects anything outside `0..=5`.
    pub fn from_i32(value: i32) -> Result<Self, ContractViolation> {
        if value < Self::MIN as i32 || value > Self::MAX as i32 {
            return Err(ContractViolation::GradeOutOfRange(value));
        }
        Ok(Grade(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// True for grades `{0,1,2}`, which trigger a final-drill re-ask instead
    /// of advancing the schedule forward.
    pub fn is_final_drill(self) -> bool {
        self.0 <= 2
    }
}

impl TryFrom<u8> for Grade {
    type Error = ContractViolation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}
