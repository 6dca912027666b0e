//! The SSRF ("Spaced Selective Repetition Function") interval, difficulty
//! and load-coefficient functions. These are pure numeric functions with no
//! dependency on the oracle or on `LUState` — [`crate::scheduler`] is the
//! layer that wires them into a scheduling decision.

use crate::error::ContractViolation;
use crate::priority::Priority;

/// `SSRF(n, AG, G, P) = 1 + round(n^(AG/2) * exp(G - P))`.
///
/// Maps a number of prior reviews, a running average grade, a current (or
/// sentinel) grade, and a priority to a non-negative day interval.
///
/// `n` must be `>= 1`, `avg_grade` must be in `[0.0, 5.0]`, and `grade` must
/// be in `-1..=5` — the `-1` sentinel is used by the scheduler to derive
/// `Imin` from `Imax`'s grade minus one, and belongs to this function's
/// domain rather than to [`crate::grade::Grade`] itself. Rounding is
/// half-away-from-zero, which is what `f64::round` already does.
///
/// Guaranteed to return `>= 1`. Monotone: non-decreasing in `n`, `avg_grade`
/// and `grade`; non-increasing in `priority`.
pub fn interval(n: u32, avg_grade: f64, grade: i32, priority: Priority) -> Result<u32, ContractViolation> {
    validate_num_reviews(n)?;
    validate_avg_grade(avg_grade)?;
    if !(-1..=5).contains(&grade) {
        return Err(ContractViolation::SsrfGradeOutOfRange(grade));
    }

    let base_interval = (n as f64).powf(avg_grade / 2.0);
    let scale_factor = (grade as f64 - priority.weight()).exp();
    let raw = base_interval * scale_factor;
    let value = 1 + raw.round() as i64;

    validate_interval(value)?;
    Ok(value as u32)
}

/// `D(P, I_ideal, I_last) = ln((I_ideal + 1) / (I_last + 1))`, where
/// `I_ideal = SSRF(n, 5.0, 5, P)`.
///
/// Compares a realised last interval against the interval an ideal item
/// (maximum average grade, maximum current grade) of the same priority
/// would have earned. Guaranteed `>= 0.0` provided `last_interval <=
/// I_ideal`; callers that violate this (an unrealistically long realised
/// interval) get a contract violation rather than a silently negative
/// difficulty.
pub fn difficulty(n: u32, priority: Priority, last_interval: u32) -> Result<f64, ContractViolation> {
    validate_interval(last_interval as i64)?;
    let ideal_interval = interval(n, 5.0, 5, priority)?;

    let value = ((ideal_interval as f64 + 1.0) / (last_interval as f64 + 1.0)).ln();
    validate_difficulty(value)?;
    Ok(value)
}

/// `LC[i] = (term_W(i) + term_D(i)) / 2` for parallel workload and average
/// difficulty sequences of equal, non-zero length.
///
/// `term_W(i) = (Wmin/W[i] - 1)^2` (0 when `W[i] == 0`), and symmetrically
/// for `term_D`. Guaranteed `0.0 <= LC[i] <= 1.0` for every `i`; `LC[i] ==
/// 0.0` whenever `W[i]` and `AD[i]` both already equal their respective
/// minimums.
pub fn load_coefficients(workloads: &[i64], avg_difficulties: &[f64]) -> Result<Vec<f64>, ContractViolation> {
    validate_workloads(workloads)?;
    validate_avg_difficulties(avg_difficulties)?;
    if workloads.len() != avg_difficulties.len() {
        return Err(ContractViolation::DifficultyLengthMismatch {
            expected: workloads.len(),
            actual: avg_difficulties.len(),
        });
    }

    let min_workload = *workloads.iter().min().expect("non-empty, checked above") as f64;
    let min_difficulty = avg_difficulties
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    let coeffs = workloads
        .iter()
        .zip(avg_difficulties.iter())
        .map(|(&w, &ad)| {
            let term_w = if w != 0 {
                (min_workload / w as f64 - 1.0).powi(2)
            } else {
                0.0
            };
            let term_d = if ad != 0.0 {
                (min_difficulty / ad - 1.0).powi(2)
            } else {
                0.0
            };
            (term_w + term_d) / 2.0
        })
        .collect::<Vec<_>>();

    for &lc in &coeffs {
        if !(0.0..=1.0).contains(&lc) {
            return Err(ContractViolation::LoadCoefficientOutOfRange(lc));
        }
    }
    Ok(coeffs)
}

pub(crate) fn validate_num_reviews(n: u32) -> Result<(), ContractViolation> {
    if n < 1 {
        return Err(ContractViolation::NumReviewsOutOfRange(n as i64));
    }
    Ok(())
}

pub(crate) fn validate_avg_grade(avg_grade: f64) -> Result<(), ContractViolation> {
    if !(0.0..=5.0).contains(&avg_grade) {
        return Err(ContractViolation::AvgGradeOutOfRange(avg_grade));
    }
    Ok(())
}

pub(crate) fn validate_interval(interval: i64) -> Result<(), ContractViolation> {
    if interval < 1 {
        return Err(ContractViolation::IntervalOutOfRange(interval));
    }
    Ok(())
}

pub(crate) fn validate_difficulty(difficulty: f64) -> Result<(), ContractViolation> {
    if difficulty < 0.0 {
        return Err(ContractViolation::DifficultyOutOfRange(difficulty));
    }
    Ok(())
}

pub(crate) fn validate_workloads(workloads: &[i64]) -> Result<(), ContractViolation> {
    if workloads.is_empty() {
        return Err(ContractViolation::EmptyWorkloadRange);
    }
    for &w in workloads {
        if w < 0 {
            return Err(ContractViolation::NegativeWorkload(w));
        }
    }
    Ok(())
}

pub(crate) fn validate_avg_difficulties(avg_difficulties: &[f64]) -> Result<(), ContractViolation> {
    for &ad in avg_difficulties {
        if ad < 0.0 {
            return Err(ContractViolation::NegativeAvgDifficulty(ad));
        }
    }
    Ok(())
}
