use chrono::NaiveDate;

/// Read-only view over the forward-looking per-day aggregate state the
/// scheduler needs: how many items are already scheduled on a given day,
/// and the average difficulty of those items.
///
/// Implementations are free to back this with a database, an in-memory
/// index, or a test stub; the scheduler only depends on the trait. The
/// scheduler borrows the oracle (`&O`) for the duration of a single
/// `schedule` call and never outlives it.
///
/// Both methods take an inclusive `[from, to]` day range and must return a
/// sequence whose length equals the number of days in that range. Neither
/// method should count the learning unit currently being scheduled, and the
/// oracle must behave as if pure across the two calls made within a single
/// `schedule` invocation (no visible mutation between them).
pub trait WorkloadOracle {
    /// Number of items already scheduled for each day in `[from, to]`.
    ///
    /// Conceptually every entry is `>= 0`; the return type is `i64` rather
    /// than an unsigned type so that a misbehaving implementation returning
    /// a negative count can be observed and rejected as a contract
    /// violation instead of being impossible to express.
    fn get_workloads(&self, from: NaiveDate, to: NaiveDate) -> Vec<i64>;

    /// Average `difficulty` of the items scheduled for each day in
    /// `[from, to]`.
    fn get_avg_difficulties(&self, from: NaiveDate, to: NaiveDate) -> Vec<f64>;
}
