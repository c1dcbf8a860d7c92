//! Paginated salary aggregation shared by every job board.

use common::{LanguageStatistics, SalaryRange, VacancySummary};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CollectError;
use crate::transport::{PageRequest, Transport};

/// Hard ceiling on pages requested per language, whatever the board says.
pub const MAX_PAGES: u32 = 100;

/// One decoded result page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    /// Total matches the board reports for the whole query.
    pub found: u64,
    pub salaries: Vec<SalaryRange>,
    /// No further page should be requested after this one.
    pub is_last: bool,
}

/// Source-specific half of the aggregation: how to ask and how to read.
pub trait JobBoard {
    fn name(&self) -> &'static str;

    /// Currency salaries must be quoted in to count.
    fn currency(&self) -> &'static str;

    fn page_request(&self, language: &str, page: u32) -> PageRequest;

    fn decode_page(&self, page: u32, body: Value) -> Result<SearchPage, CollectError>;
}

/// Walks every page for one language and summarises the salaries.
///
/// `vacancies_found` comes from the first page; later pages may report a
/// slightly different total while the listing changes underneath us.
pub fn collect_language<B, T>(
    board: &B,
    transport: &T,
    language: &str,
) -> Result<VacancySummary, CollectError>
where
    B: JobBoard + ?Sized,
    T: Transport + ?Sized,
{
    let mut found = None;
    let mut estimates = Vec::new();

    for page in 0..MAX_PAGES {
        let request = board.page_request(language, page);
        let body = transport.get_json(&request)?;
        let search_page = board.decode_page(page, body)?;
        debug!(
            board = board.name(),
            language,
            page,
            items = search_page.salaries.len(),
            "page decoded"
        );

        if found.is_none() {
            found = Some(search_page.found);
        }
        estimates.extend(
            search_page
                .salaries
                .iter()
                .filter_map(|salary| salary.estimate_in(board.currency())),
        );

        if search_page.is_last {
            break;
        }
    }

    Ok(VacancySummary::from_estimates(
        found.unwrap_or_default(),
        &estimates,
    ))
}

/// Summaries for each language, in the order given.
pub fn collect_statistics<B, T>(
    board: &B,
    transport: &T,
    languages: &[String],
) -> Result<LanguageStatistics, CollectError>
where
    B: JobBoard + ?Sized,
    T: Transport + ?Sized,
{
    let mut statistics = LanguageStatistics::new();

    for language in languages {
        let summary = collect_language(board, transport, language)?;
        info!(
            board = board.name(),
            language = language.as_str(),
            found = summary.vacancies_found,
            processed = summary.vacancies_processed,
            average = summary.average_salary,
            "language collected"
        );
        statistics.insert(language.clone(), summary);
    }

    Ok(statistics)
}
