//! Numeric helpers shared by the animation schedules and the stats panels
//!
//! Everything here is pure: the schedules feed `stagger_delay` into the
//! sequencer, and the About view computes its summary figures with
//! `calculate_statistic` on every render.

use std::time::Duration;

/// Delay for the `index`-th item of a staggered batch: `base + index * increment`.
///
/// Batches are released independently, so the only synchronization between
/// items is this arithmetic.
pub fn stagger_delay(index: usize, base_ms: u64, increment_ms: u64) -> Duration {
    Duration::from_millis(base_ms + index as u64 * increment_ms)
}

/// Statistical summary to compute in [`calculate_statistic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Mean,
    Median,
    /// Population standard deviation (denominator n, not n-1)
    Std,
}

impl Metric {
    /// Display label for the stats panel
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Mean => "mean",
            Metric::Median => "median",
            Metric::Std => "std dev",
        }
    }
}

/// Compute a summary statistic over `data`, rounded to `precision` decimal
/// digits (half away from zero). Empty input yields 0.0.
pub fn calculate_statistic(data: &[f64], metric: Metric, precision: u32) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let result = match metric {
        Metric::Mean => mean(data),
        Metric::Median => median(data),
        Metric::Std => std_dev(data),
    };

    round_to(result, precision)
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn std_dev(data: &[f64]) -> f64 {
    let m = mean(data);
    let variance = data.iter().map(|v| (v - m).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Round to `precision` decimal digits. `f64::round` ties away from zero,
/// which is the rounding the displayed figures use.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_linear() {
        assert_eq!(stagger_delay(0, 100, 50), Duration::from_millis(100));
        assert_eq!(stagger_delay(1, 100, 50), Duration::from_millis(150));
        assert_eq!(stagger_delay(4, 100, 50), Duration::from_millis(300));
        // Non-default base/increment
        assert_eq!(stagger_delay(3, 200, 300), Duration::from_millis(1100));
        assert_eq!(stagger_delay(2, 500, 200), Duration::from_millis(900));
    }

    #[test]
    fn test_stagger_delay_zero_increment() {
        assert_eq!(stagger_delay(7, 250, 0), Duration::from_millis(250));
    }

    #[test]
    fn test_statistic_empty_input() {
        assert_eq!(calculate_statistic(&[], Metric::Mean, 2), 0.0);
        assert_eq!(calculate_statistic(&[], Metric::Median, 2), 0.0);
        assert_eq!(calculate_statistic(&[], Metric::Std, 2), 0.0);
    }

    #[test]
    fn test_statistic_single_element() {
        assert_eq!(calculate_statistic(&[42.0], Metric::Mean, 2), 42.0);
        assert_eq!(calculate_statistic(&[42.0], Metric::Median, 2), 42.0);
        assert_eq!(calculate_statistic(&[42.0], Metric::Std, 2), 0.0);
    }

    #[test]
    fn test_statistic_mean() {
        assert_eq!(calculate_statistic(&[1.0, 2.0, 3.0, 4.0], Metric::Mean, 2), 2.5);
        assert_eq!(calculate_statistic(&[10.0, 20.0], Metric::Mean, 1), 15.0);
    }

    #[test]
    fn test_statistic_median_even_and_odd() {
        // Even length: midpoint of the two middles
        assert_eq!(
            calculate_statistic(&[1.0, 2.0, 3.0, 4.0], Metric::Median, 2),
            2.5
        );
        // Odd length: middle element
        assert_eq!(
            calculate_statistic(&[5.0, 1.0, 3.0], Metric::Median, 2),
            3.0
        );
        // Unsorted input gets sorted on a copy
        assert_eq!(
            calculate_statistic(&[4.0, 1.0, 3.0, 2.0], Metric::Median, 2),
            2.5
        );
    }

    #[test]
    fn test_statistic_population_std() {
        // Classic example: population std of this set is exactly 2
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(calculate_statistic(&data, Metric::Std, 2), 2.0);
    }

    #[test]
    fn test_statistic_precision_rounding() {
        let data = [1.0, 2.0, 4.0];
        // mean = 2.3333... -> 2.33 at precision 2, 2.3 at precision 1
        assert_eq!(calculate_statistic(&data, Metric::Mean, 2), 2.33);
        assert_eq!(calculate_statistic(&data, Metric::Mean, 1), 2.3);
        assert_eq!(calculate_statistic(&data, Metric::Mean, 0), 2.0);
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }
}
