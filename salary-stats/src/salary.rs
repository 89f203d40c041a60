/// Single point estimate for a salary range where either bound may be
/// missing. A non-positive bound counts as missing: SuperJob reports
/// undisclosed bounds as 0 rather than omitting the field.
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    let salary_from = salary_from.filter(|salary| *salary > 0.0);
    let salary_to = salary_to.filter(|salary| *salary > 0.0);
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_both_bounds_give_midpoint() {
        assert_eq!(
            predict_salary(Some(100_000.0), Some(150_000.0)),
            Some(125_000.0)
        );
    }

    #[test]
    fn test_lower_bound_only_is_scaled_up() {
        assert_eq!(predict_salary(Some(100_000.0), None), Some(120_000.0));
    }

    #[test]
    fn test_upper_bound_only_is_scaled_down() {
        assert_eq!(predict_salary(None, Some(80_000.0)), Some(64_000.0));
    }

    #[test]
    fn test_no_bounds_gives_no_estimate() {
        assert_eq!(predict_salary(None, None), None);
    }

    #[test]
    fn test_zero_bound_counts_as_missing() {
        assert_eq!(predict_salary(Some(0.0), Some(80_000.0)), Some(64_000.0));
        assert_eq!(predict_salary(Some(100_000.0), Some(0.0)), Some(120_000.0));
        assert_eq!(predict_salary(Some(0.0), Some(0.0)), None);
    }
}
