use std::future::Future;

use crate::types::{LanguageSummary, Result};

/// One parsed page of search results for a single query.
pub(crate) struct ResultsPage {
    /// salary estimates extracted from this page's vacancies
    pub estimates: Vec<f64>,
    /// total result count the source reports for the whole search
    pub found: u64,
    /// page count the source reports, if it reports one
    pub pages: Option<u32>,
}

/// Walks pages `0..bound` and folds the extracted estimates into one
/// summary. The bound starts at `initial_pages`; a source that reports
/// its own page count overrides the bound on every response, so the scan
/// stops exactly at the most recently reported count. A source that
/// reports none keeps the fixed cap. The found-count of the last fetched
/// page wins.
pub(crate) async fn collect_summary<F, Fut>(
    initial_pages: u32,
    mut fetch_page: F,
) -> Result<LanguageSummary>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ResultsPage>>,
{
    let mut pages = initial_pages;
    let mut page = 0;
    let mut found = 0;
    let mut estimates = Vec::new();
    while page < pages {
        let results = fetch_page(page).await?;
        if let Some(reported) = results.pages {
            pages = reported;
        }
        found = results.found;
        estimates.extend(results.estimates);
        page += 1;
    }
    Ok(LanguageSummary::from_estimates(found, &estimates))
}
