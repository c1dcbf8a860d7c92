//! Programmer salary collector
//!
//! Queries HeadHunter and SuperJob for every configured language and
//! prints average predicted salaries as two tables.

use anyhow::{Context, Result};
use collector::report::print_table;
use collector::{collect_statistics, logging, Config, HeadHunter, HttpTransport, JobBoard, SuperJob};
use tracing::info;

fn main() -> Result<()> {
    logging::init_logging()?;

    let config = Config::from_env()?;
    let transport = HttpTransport::new()?;
    info!(languages = config.languages.len(), "starting salary collection");

    let boards: [Box<dyn JobBoard>; 2] = [
        Box::new(HeadHunter::new(&config)),
        Box::new(SuperJob::new(&config)),
    ];

    for board in &boards {
        let statistics = collect_statistics(board.as_ref(), &transport, &config.languages)
            .with_context(|| format!("collecting {} statistics", board.name()))?;
        print_table(&statistics, &format!("{} {}", board.name(), config.city_label));
    }

    Ok(())
}
