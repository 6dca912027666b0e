/// Lifecycle state of a learning unit, relative to the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LUStatus {
    /// Item is to be re-asked in the same session before it can be
    /// scheduled forward.
    FinalDrill,
    /// Item is scheduled for its next review date.
    Memorized,
}

impl LUStatus {
    /// The status transition rule (§4.4.4): grades `{0,1,2}` drop the item
    /// into final drill, `{3,4,5}` mark it memorized, regardless of the
    /// current status.
    pub fn after_grade(grade: crate::grade::Grade) -> Self {
        if grade.is_final_drill() {
            LUStatus::FinalDrill
        } else {
            LUStatus::Memorized
        }
    }
}
