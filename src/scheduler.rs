//! The scheduling loop: takes a reviewed [`LUState`] and an oracle, and
//! produces the next `num_reviews`, `avg_grade`, `difficulty`, `status` and
//! `next_review`.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::ContractViolation;
use crate::grade::Grade;
use crate::oracle::WorkloadOracle;
use crate::priority::Priority;
use crate::ssrf;
use crate::state::LUState;
use crate::status::LUStatus;

/// Schedules learning units against a borrowed [`WorkloadOracle`].
///
/// Non-owning: a `Scheduler` holds only a shared reference to its oracle and
/// does not outlive it. Construct one per `schedule` call, or keep it around
/// for the lifetime of the oracle reference — it carries no state of its
/// own.
pub struct Scheduler<'a, O: WorkloadOracle> {
    oracle: &'a O,
}

impl<'a, O: WorkloadOracle> Scheduler<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Scheduler { oracle }
    }

    /// Resets `lu` to the §4.5 initial state: `grade = 0`, `num_reviews =
    /// 1`, `avg_grade = 2.5`, `priority = Mid`, `difficulty = 0.0`,
    /// `status = Memorized`, with no review history. `opaque_ref` is left
    /// untouched. Equivalent to `*lu = LUState::new(lu.opaque_ref)` for a
    /// `Clone` opaque reference, but works for any `T` since it never needs
    /// to reconstruct `lu`.
    pub fn fill_initial<T>(&self, lu: &mut LUState<T>) {
        lu.grade = Grade::new(0).expect("0 is within the valid grade range");
        lu.num_reviews = 1;
        lu.avg_grade = 2.5;
        lu.priority = Priority::Mid;
        lu.difficulty = 0.0;
        lu.status = LUStatus::Memorized;
        lu.last_review = None;
        lu.next_review = None;
    }

    /// Applies one review to `lu`, mutating it in place.
    ///
    /// `now` defaults to the current instant; tests pass a fixed value to
    /// make the scheduling decision reproducible. On the final-drill fast
    /// path (§4.4.1) the oracle is never consulted. On a rejection, `lu` is
    /// left exactly as it was — every new field value is computed into a
    /// local before anything is written back.
    pub fn schedule<T>(
        &self,
        lu: &mut LUState<T>,
        now: Option<DateTime<Utc>>,
    ) -> Result<(), ContractViolation> {
        lu.validate()?;
        let now = now.unwrap_or_else(Utc::now);
        let today = now.date_naive();

        tracing::debug!(
            status = ?lu.status,
            grade = lu.grade.value(),
            num_reviews = lu.num_reviews,
            "scheduling review"
        );

        // §4.4.1: final-drill items are re-asked in the same session; the
        // oracle is irrelevant to this path and is never consulted.
        if lu.status == LUStatus::FinalDrill {
            lu.status = LUStatus::after_grade(lu.grade);
            lu.last_review = Some(now);
            return Ok(());
        }

        let n = lu.num_reviews;
        let avg_grade = lu.avg_grade;
        let grade = lu.grade.value() as i32;
        let priority = lu.priority;

        // §4.4.2: the interval window [Imin, Imax] bounds the candidate
        // review dates for this repetition.
        let i_min = ssrf::interval(n, avg_grade, grade - 1, priority)?;
        let i_max = ssrf::interval(n, avg_grade, grade, priority)?;
        if i_min > i_max {
            return Err(ContractViolation::IntervalWindowInverted {
                min: i_min as i64,
                max: i_max as i64,
            });
        }

        let from = today + Days::new(i_min as u64);
        let to = today + Days::new(i_max as u64);
        let window_len = (i_max - i_min + 1) as usize;

        let chosen_offset = self.choose_offset(from, to, window_len, i_min, n, priority)?;
        let chosen_interval = i_min + chosen_offset as u32;

        let new_num_reviews = n + 1;
        let new_avg_grade = (avg_grade * n as f64 + grade as f64) / new_num_reviews as f64;
        let new_difficulty = ssrf::difficulty(n, priority, chosen_interval)?;
        let new_status = LUStatus::after_grade(lu.grade);
        let next_review = today_plus_days_at(now, chosen_interval);

        tracing::debug!(
            i_min, i_max, chosen_interval, new_avg_grade, new_difficulty, ?new_status,
            "scheduling decision"
        );

        lu.num_reviews = new_num_reviews;
        lu.avg_grade = new_avg_grade;
        lu.difficulty = new_difficulty;
        lu.status = new_status;
        lu.last_review = Some(now);
        lu.next_review = Some(next_review);

        lu.validate()?;
        Ok(())
    }

    /// §4.4.3: picks the zero-workload shortcut when available, otherwise
    /// the day within the window that reduces total load coefficients the
    /// most. Returns an offset from `i_min` in `0..window_len`.
    fn choose_offset(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        window_len: usize,
        i_min: u32,
        n: u32,
        priority: Priority,
    ) -> Result<usize, ContractViolation> {
        let workloads = self.oracle.get_workloads(from, to);
        if workloads.len() != window_len {
            return Err(ContractViolation::WorkloadLengthMismatch {
                expected: window_len,
                actual: workloads.len(),
            });
        }
        ssrf::validate_workloads(&workloads)?;

        // Largest index attaining the zero-workload minimum: later days in
        // the window are preferred when several are equally free.
        if let Some(offset) = workloads.iter().rposition(|&w| w == 0) {
            tracing::debug!(offset, "zero-workload day found in window");
            return Ok(offset);
        }

        let avg_difficulties = self.oracle.get_avg_difficulties(from, to);
        if avg_difficulties.len() != window_len {
            return Err(ContractViolation::DifficultyLengthMismatch {
                expected: window_len,
                actual: avg_difficulties.len(),
            });
        }
        ssrf::validate_avg_difficulties(&avg_difficulties)?;

        let lc_old = ssrf::load_coefficients(&workloads, &avg_difficulties)?;

        // For each candidate day, simulate adding this review to that day's
        // load and difficulty, and measure the resulting load coefficient
        // against the day's own coefficient before the addition. §4.4 step 6:
        // I = Imin + i.
        let mut best_offset = 0usize;
        let mut best_ratio = f64::INFINITY;
        for offset in 0..window_len {
            let mut new_workloads = workloads.clone();
            new_workloads[offset] += 1;

            let added_difficulty = ssrf::difficulty(n, priority, i_min + offset as u32)?;
            let mut new_avg_difficulties = avg_difficulties.clone();
            let w = workloads[offset] as f64;
            new_avg_difficulties[offset] =
                (avg_difficulties[offset] * w + added_difficulty) / (w + 1.0);

            let lc_new = ssrf::load_coefficients(&new_workloads, &new_avg_difficulties)?;

            let ratio = if lc_old[offset] == 0.0 {
                f64::INFINITY
            } else {
                lc_new[offset] / lc_old[offset]
            };

            // `<=` keeps the later of two tied minima.
            if ratio <= best_ratio {
                best_ratio = ratio;
                best_offset = offset;
            }
        }

        tracing::debug!(best_offset, best_ratio, "chosen by load-coefficient ratio");
        Ok(best_offset)
    }
}

fn today_plus_days_at(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now + chrono::Duration::days(days as i64)
}
