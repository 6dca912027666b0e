//! Property-based tests for the §8.1 invariants.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use ssrf_scheduler::priority::Priority;
use ssrf_scheduler::ssrf::{difficulty, interval, load_coefficients};
use ssrf_scheduler::{Grade, LUState, LUStatus, Scheduler, WorkloadOracle};

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Mid),
        Just(Priority::High),
    ]
}

proptest! {
    #[test]
    fn ssrf_is_always_at_least_one(
        n in 1u32..200,
        avg_grade in 0.0f64..=5.0,
        grade in -1i32..=5,
        priority in priority_strategy(),
    ) {
        let value = interval(n, avg_grade, grade, priority).unwrap();
        prop_assert!(value >= 1);
    }

    #[test]
    fn ssrf_is_non_decreasing_in_n(
        n in 1u32..199,
        avg_grade in 0.0f64..=5.0,
        grade in -1i32..=5,
        priority in priority_strategy(),
    ) {
        let lo = interval(n, avg_grade, grade, priority).unwrap();
        let hi = interval(n + 1, avg_grade, grade, priority).unwrap();
        prop_assert!(hi >= lo);
    }

    #[test]
    fn ssrf_is_non_decreasing_in_grade(
        n in 1u32..200,
        avg_grade in 0.0f64..=5.0,
        grade in -1i32..5,
        priority in priority_strategy(),
    ) {
        let lo = interval(n, avg_grade, grade, priority).unwrap();
        let hi = interval(n, avg_grade, grade + 1, priority).unwrap();
        prop_assert!(hi >= lo);
    }

    #[test]
    fn ssrf_is_non_increasing_in_priority(
        n in 1u32..200,
        avg_grade in 0.0f64..=5.0,
        grade in -1i32..=5,
    ) {
        let low = interval(n, avg_grade, grade, Priority::Low).unwrap();
        let mid = interval(n, avg_grade, grade, Priority::Mid).unwrap();
        let high = interval(n, avg_grade, grade, Priority::High).unwrap();
        prop_assert!(low >= mid);
        prop_assert!(mid >= high);
    }

    #[test]
    fn difficulty_is_non_negative_when_interval_does_not_exceed_ideal(
        n in 1u32..100,
        priority in priority_strategy(),
        fraction in 0.0f64..=1.0,
    ) {
        let ideal = interval(n, 5.0, 5, priority).unwrap();
        let last_interval = 1 + (fraction * (ideal - 1) as f64).round() as u32;
        let d = difficulty(n, priority, last_interval).unwrap();
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn load_coefficients_stay_in_unit_range(
        seed in prop::collection::vec((0i64..500, 0.0f64..10.0), 1..12),
    ) {
        let workloads: Vec<i64> = seed.iter().map(|(w, _)| *w).collect();
        let difficulties: Vec<f64> = seed.iter().map(|(_, d)| *d).collect();
        let lc = load_coefficients(&workloads, &difficulties).unwrap();
        for v in lc {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}

struct FixedOracle {
    workloads: Vec<i64>,
    avg_difficulties: Vec<f64>,
}

impl WorkloadOracle for FixedOracle {
    fn get_workloads(&self, _from: NaiveDate, _to: NaiveDate) -> Vec<i64> {
        self.workloads.clone()
    }
    fn get_avg_difficulties(&self, _from: NaiveDate, _to: NaiveDate) -> Vec<f64> {
        self.avg_difficulties.clone()
    }
}

proptest! {
    #[test]
    fn next_review_always_lands_within_the_window(
        n in 1u32..20,
        avg_grade in 0.0f64..=5.0,
        grade in 0u8..=5,
        priority in priority_strategy(),
    ) {
        let g = Grade::new(grade).unwrap();
        let i_min = interval(n, avg_grade, grade as i32 - 1, priority).unwrap();
        let i_max = interval(n, avg_grade, grade as i32, priority).unwrap();
        prop_assume!(i_min <= i_max);
        let window_len = (i_max - i_min + 1) as usize;

        let workloads: Vec<i64> = (0..window_len as i64).map(|i| i + 1).collect();
        let avg_difficulties: Vec<f64> = vec![1.0; window_len];
        let oracle = FixedOracle { workloads, avg_difficulties };
        let scheduler = Scheduler::new(&oracle);

        let mut lu = LUState::new(());
        lu.num_reviews = n;
        lu.avg_grade = avg_grade;
        lu.priority = priority;
        lu.grade = g;

        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        scheduler.schedule(&mut lu, Some(now)).unwrap();

        prop_assert_eq!(lu.num_reviews, n + 1);
        let offset_days = (lu.next_review.unwrap() - now).num_days();
        prop_assert!(offset_days >= i_min as i64);
        prop_assert!(offset_days <= i_max as i64);
    }
}

#[test]
fn final_drill_path_never_increments_num_reviews() {
    struct PanicOracle;
    impl WorkloadOracle for PanicOracle {
        fn get_workloads(&self, _: NaiveDate, _: NaiveDate) -> Vec<i64> {
            panic!("not reachable on the final-drill path")
        }
        fn get_avg_difficulties(&self, _: NaiveDate, _: NaiveDate) -> Vec<f64> {
            panic!("not reachable on the final-drill path")
        }
    }
    let oracle = PanicOracle;
    let scheduler = Scheduler::new(&oracle);
    let mut lu = LUState::new(());
    lu.status = LUStatus::FinalDrill;
    lu.grade = Grade::new(0).unwrap();

    scheduler.schedule(&mut lu, None).unwrap();
    assert_eq!(lu.num_reviews, 1);
}
