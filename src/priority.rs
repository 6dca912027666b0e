use crate::error::ContractViolation;

/// Material priority. Higher priority shortens intervals.
///
/// | Priority | Weight | Suggested for words |
/// |---|---|---|
/// | `Low` | 2.0 | rare (> 10,000) |
/// | `Mid` | 3.0 | frequent (<= 10,000) |
/// | `High` | 4.0 | most common (<= 2,000) |
///
/// Modeled as a closed enum rather than a raw `f64`: the invariant
/// `priority ∈ {2.0, 3.0, 4.0}` then holds for every `Priority` value that
/// exists, with no runtime check needed once one is constructed.
/// [`Priority::from_weight`] is the validation boundary for hosts that
/// persist the raw weight (e.g. a database column) and need to parse it
/// back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Priority {
    Low,
    Mid,
    High,
}

impl Priority {
    pub const LOW_WEIGHT: f64 = 2.0;
    pub const MID_WEIGHT: f64 = 3.0;
    pub const HIGH_WEIGHT: f64 = 4.0;

    pub fn weight(self) -> f64 {
        match self {
            Priority::Low => Self::LOW_WEIGHT,
            Priority::Mid => Self::MID_WEIGHT,
            Priority::High => Self::HIGH_WEIGHT,
        }
    }

    /// Parses a raw priority weight, rejecting anything other than 2.0,
    /// 3.0, or 4.0.
    pub fn from_weight(weight: f64) -> Result<Self, ContractViolation> {
        if weight == Self::LOW_WEIGHT {
            Ok(Priority::Low)
        } else if weight == Self::MID_WEIGHT {
            Ok(Priority::Mid)
        } else if weight == Self::HIGH_WEIGHT {
            Ok(Priority::High)
        } else {
            Err(ContractViolation::InvalidPriority(weight))
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Mid
    }
}
