use chrono::{Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::salary::predict_salary;
use crate::stats::{collect_summary, ResultsPage};
use crate::types::{Error, Result};
use crate::LanguageStatistics;

/// Currency marker SuperJob uses for rouble salaries.
const LOCAL_CURRENCY: &str = "rub";

/// Search filters for the SuperJob vacancy API.
pub struct Search {
    pub base_url: String,
    /// town id, 4 is Moscow
    pub town: u32,
    /// catalogue id, 48 is programming
    pub catalogues: u32,
    pub page_size: u32,
    /// the API only serves the first few result pages
    pub max_pages: u32,
    pub published_within_days: i64,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies".to_owned(),
            town: 4,
            catalogues: 48,
            page_size: 100,
            max_pages: 5,
            published_within_days: 30,
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    town: u32,
    catalogues: u32,
    keyword: &'a str,
    date_published_from: i64,
    page: u32,
    count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    objects: Vec<Vacancy>,
    total: u64,
}

/// SuperJob always sends the payment fields, with 0 standing for an
/// undisclosed bound.
#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: f64,
    payment_to: f64,
    currency: String,
}

fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    if vacancy.currency != LOCAL_CURRENCY {
        return None;
    }
    predict_salary(Some(vacancy.payment_from), Some(vacancy.payment_to))
}

fn extract_results(response: ApiResponse) -> ResultsPage {
    ResultsPage {
        estimates: response.objects.iter().filter_map(predict_rub_salary).collect(),
        found: response.total,
        pages: None,
    }
}

async fn fetch_page(
    client: &Client,
    search: &Search,
    api_key: &str,
    language: &str,
    date_published_from: i64,
    page: u32,
) -> Result<ResultsPage> {
    log::info!("downloading {} - page {}", language, page + 1);
    let params = SearchParams {
        town: search.town,
        catalogues: search.catalogues,
        keyword: language,
        date_published_from,
        page,
        count: search.page_size,
    };
    let resp = client
        .get(&search.base_url)
        .header("X-Api-App-Id", api_key)
        .query(&params)
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(Error::RequestNotOk(search.base_url.clone()));
    }
    let response: ApiResponse = resp.json().await?;
    Ok(extract_results(response))
}

/// Walks the first `max_pages` result pages for each language and folds
/// the disclosed rouble salaries into one summary per language.
pub async fn language_statistics(
    client: &Client,
    search: &Search,
    api_key: &str,
    languages: &[String],
) -> Result<LanguageStatistics> {
    let date_published_from =
        (Utc::now() - Duration::days(search.published_within_days)).timestamp();
    let mut statistics = Vec::with_capacity(languages.len());
    for language in languages {
        let summary = collect_summary(search.max_pages, |page| {
            fetch_page(client, search, api_key, language, date_published_from, page)
        })
        .await?;
        statistics.push((language.clone(), summary));
    }
    Ok(statistics)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn vacancy(value: serde_json::Value) -> Vacancy {
        serde_json::from_value(value).expect("Failed to deserialize vacancy")
    }

    #[test]
    fn test_foreign_currency_is_skipped() {
        let vacancy = vacancy(json!({
            "payment_from": 50_000, "payment_to": 90_000, "currency": "usd"
        }));
        assert_eq!(predict_rub_salary(&vacancy), None);
    }

    #[test]
    fn test_rouble_range_is_estimated() {
        let vacancy = vacancy(json!({
            "payment_from": 50_000, "payment_to": 90_000, "currency": "rub"
        }));
        assert_eq!(predict_rub_salary(&vacancy), Some(70_000.0));
    }

    #[test]
    fn test_zero_bounds_are_undisclosed() {
        let zero_vacancy = vacancy(json!({
            "payment_from": 0, "payment_to": 0, "currency": "rub"
        }));
        assert_eq!(predict_rub_salary(&zero_vacancy), None);
        let open_vacancy = vacancy(json!({
            "payment_from": 0, "payment_to": 90_000, "currency": "rub"
        }));
        assert_eq!(predict_rub_salary(&open_vacancy), Some(72_000.0));
    }

    #[tokio::test]
    async fn test_paginated_search_is_summarized() {
        let summary = collect_summary(5, |_page| async {
            let response: ApiResponse = serde_json::from_value(json!({
                "objects": [
                    { "payment_from": 1000, "payment_to": 2000, "currency": "rub" }
                ],
                "total": 5,
                "more": false
            }))
            .expect("Failed to deserialize search response");
            Ok(extract_results(response))
        })
        .await
        .unwrap();
        assert_eq!(summary.vacancies_found, 5);
        assert_eq!(summary.vacancies_processed, 5);
        assert_eq!(summary.average_salary, 1500);
    }
}
