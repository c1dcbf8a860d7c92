//! HeadHunter (api.hh.ru) vacancy search.

use common::SalaryRange;
use serde::Deserialize;
use serde_json::Value;

use crate::board::{JobBoard, SearchPage, MAX_PAGES};
use crate::config::Config;
use crate::error::CollectError;
use crate::transport::PageRequest;

pub const VACANCIES_URL: &str = "https://api.hh.ru/vacancies";

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    found: u64,
    #[serde(default)]
    items: Vec<Vacancy>,
    /// Number of pages the API is willing to serve for this query.
    #[serde(default)]
    pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<u64>,
    to: Option<u64>,
    #[serde(default)]
    currency: Option<String>,
}

pub struct HeadHunter {
    role_keyword: String,
    area: u32,
    period_days: u32,
}

impl HeadHunter {
    pub fn new(config: &Config) -> Self {
        HeadHunter {
            role_keyword: config.role_keyword.clone(),
            area: config.hh_area,
            period_days: config.hh_period_days,
        }
    }
}

impl JobBoard for HeadHunter {
    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn currency(&self) -> &'static str {
        "RUR"
    }

    fn page_request(&self, language: &str, page: u32) -> PageRequest {
        PageRequest::new(VACANCIES_URL)
            .param("text", format!("{} {}", self.role_keyword, language))
            .param("area", self.area)
            .param("period", self.period_days)
            .param("only_with_salary", true)
            .param("page", page)
    }

    fn decode_page(&self, page: u32, body: Value) -> Result<SearchPage, CollectError> {
        let decoded: VacanciesPage =
            serde_json::from_value(body).map_err(|source| CollectError::Decode {
                board: self.name(),
                page,
                source,
            })?;

        let last_available = decoded.pages.map(|pages| pages.min(MAX_PAGES));
        let is_last = page + 1 >= last_available.unwrap_or(MAX_PAGES);

        let salaries = decoded
            .items
            .into_iter()
            .filter_map(|vacancy| vacancy.salary)
            .map(|salary| {
                SalaryRange::new(salary.from, salary.to, salary.currency.unwrap_or_default())
            })
            .collect();

        Ok(SearchPage {
            found: decoded.found,
            salaries,
            is_last,
        })
    }
}
