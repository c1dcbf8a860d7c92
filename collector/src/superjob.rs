//! SuperJob (api.superjob.ru) vacancy search.

use common::SalaryRange;
use serde::Deserialize;
use serde_json::Value;

use crate::board::{JobBoard, SearchPage};
use crate::config::Config;
use crate::error::CollectError;
use crate::transport::PageRequest;

pub const VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    total: u64,
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    more: bool,
}

// SuperJob sends 0 for a bound it does not know.
#[derive(Debug, Deserialize)]
struct Vacancy {
    #[serde(default)]
    payment_from: Option<u64>,
    #[serde(default)]
    payment_to: Option<u64>,
    #[serde(default)]
    currency: Option<String>,
}

pub struct SuperJob {
    role_keyword: String,
    town: String,
    secret_key: String,
}

impl SuperJob {
    pub fn new(config: &Config) -> Self {
        SuperJob {
            role_keyword: config.role_keyword.clone(),
            town: config.sj_town.clone(),
            secret_key: config.superjob_key.clone(),
        }
    }
}

impl JobBoard for SuperJob {
    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn currency(&self) -> &'static str {
        "rub"
    }

    fn page_request(&self, language: &str, page: u32) -> PageRequest {
        PageRequest::new(VACANCIES_URL)
            .param("keyword", format!("{} {}", self.role_keyword, language))
            .param("town", &self.town)
            .param("page", page)
            .header(APP_ID_HEADER, self.secret_key.clone())
    }

    fn decode_page(&self, page: u32, body: Value) -> Result<SearchPage, CollectError> {
        let decoded: VacanciesPage =
            serde_json::from_value(body).map_err(|source| CollectError::Decode {
                board: self.name(),
                page,
                source,
            })?;

        let salaries = decoded
            .objects
            .into_iter()
            .map(|vacancy| {
                SalaryRange::new(
                    vacancy.payment_from,
                    vacancy.payment_to,
                    vacancy.currency.unwrap_or_default(),
                )
            })
            .collect();

        Ok(SearchPage {
            found: decoded.total,
            salaries,
            is_last: !decoded.more,
        })
    }
}
