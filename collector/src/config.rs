use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Shell",
];

/// Collector configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub languages: Vec<String>,
    /// Prepended to each language in the search text.
    pub role_keyword: String,
    /// City name used in table titles.
    pub city_label: String,
    pub hh_area: u32,
    pub hh_period_days: u32,
    pub sj_town: String,
    pub superjob_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let superjob_key = lookup("SUPERJOB_SECRET_KEY")
            .or_else(|| lookup("SECRET_KEY"))
            .filter(|key| !key.trim().is_empty())
            .context("SUPERJOB_SECRET_KEY must be set")?;

        Ok(Self {
            languages: lookup("SALARY_LANGUAGES")
                .map(|raw| parse_languages(&raw))
                .filter(|languages| !languages.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()),
            role_keyword: lookup("SALARY_ROLE_KEYWORD")
                .unwrap_or_else(|| "Программист".to_string()),
            city_label: lookup("SALARY_CITY_LABEL").unwrap_or_else(|| "Moscow".to_string()),
            hh_area: lookup("HH_AREA")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .context("HH_AREA must be a valid number")?,
            hh_period_days: lookup("HH_PERIOD_DAYS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("HH_PERIOD_DAYS must be a valid number")?,
            sj_town: lookup("SJ_TOWN").unwrap_or_else(|| "Москва".to_string()),
            superjob_key,
        })
    }
}

fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}
