use chrono::{Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::salary::predict_salary;
use crate::stats::{collect_summary, ResultsPage};
use crate::types::{Error, Result};
use crate::LanguageStatistics;

/// Currency marker HeadHunter uses for rouble salaries.
const LOCAL_CURRENCY: &str = "RUR";

/// Search filters for the HeadHunter vacancy API.
pub struct Search {
    pub base_url: String,
    /// region id, "1" is Moscow
    pub area: String,
    pub published_within_days: i64,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_owned(),
            area: "1".to_owned(),
            published_within_days: 30,
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    text: &'a str,
    area: &'a str,
    date_from: &'a str,
    page: u32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Vec<Vacancy>,
    pages: u32,
    found: u64,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

/// HeadHunter nests the salary in an optional sub-record; a vacancy that
/// discloses nothing sends `"salary": null`.
#[derive(Debug, Deserialize)]
struct Salary {
    #[serde(rename = "from")]
    salary_from: Option<f64>,
    #[serde(rename = "to")]
    salary_to: Option<f64>,
    currency: String,
}

/// Estimated rouble salary for one vacancy. `None` when no salary is
/// disclosed or it is quoted in a foreign currency.
fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency != LOCAL_CURRENCY {
        return None;
    }
    predict_salary(salary.salary_from, salary.salary_to)
}

fn extract_results(response: ApiResponse) -> ResultsPage {
    ResultsPage {
        estimates: response.items.iter().filter_map(predict_rub_salary).collect(),
        found: response.found,
        pages: Some(response.pages),
    }
}

async fn fetch_page(
    client: &Client,
    search: &Search,
    language: &str,
    date_from: &str,
    page: u32,
) -> Result<ResultsPage> {
    log::info!("downloading {} - page {}", language, page + 1);
    let params = SearchParams {
        text: language,
        area: &search.area,
        date_from,
        page,
    };
    let resp = client.get(&search.base_url).query(&params).send().await?;
    if !resp.status().is_success() {
        return Err(Error::RequestNotOk(search.base_url.clone()));
    }
    let response: ApiResponse = resp.json().await?;
    Ok(extract_results(response))
}

/// Walks every result page for each language and folds the disclosed
/// rouble salaries into one summary per language. The page scan tracks
/// the page count reported by the most recent response.
pub async fn language_statistics(
    client: &Client,
    search: &Search,
    languages: &[String],
) -> Result<LanguageStatistics> {
    let date_from = (Utc::now() - Duration::days(search.published_within_days))
        .format("%Y-%m-%d")
        .to_string();
    let mut statistics = Vec::with_capacity(languages.len());
    for language in languages {
        let summary =
            collect_summary(1, |page| fetch_page(client, search, language, &date_from, page))
                .await?;
        statistics.push((language.clone(), summary));
    }
    Ok(statistics)
}
