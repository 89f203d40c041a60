use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' was not successful")]
    RequestNotOk(String),
}

/// Aggregated salary figures for one search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    /// total result count the source reported for the search
    pub vacancies_found: u64,
    /// vacancies that yielded a usable salary estimate
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl LanguageSummary {
    pub(crate) fn from_estimates(vacancies_found: u64, estimates: &[f64]) -> Self {
        let vacancies_processed = estimates.len() as u64;
        let average_salary = if estimates.is_empty() {
            0
        } else {
            (estimates.iter().sum::<f64>() / vacancies_processed as f64) as u64
        };
        Self {
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_average_is_floored() {
        let summary = LanguageSummary::from_estimates(2, &[1000.0, 1001.0]);
        assert_eq!(summary.average_salary, 1000);
        assert_eq!(summary.vacancies_processed, 2);
    }

    #[test]
    fn test_empty_sample_defaults_to_zero() {
        let summary = LanguageSummary::from_estimates(42, &[]);
        assert_eq!(
            summary,
            LanguageSummary {
                vacancies_found: 42,
                vacancies_processed: 0,
                average_salary: 0,
            }
        );
    }
}
