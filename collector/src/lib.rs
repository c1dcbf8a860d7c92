pub mod board;
pub mod config;
pub mod error;
pub mod headhunter;
pub mod logging;
pub mod report;
pub mod superjob;
pub mod transport;

pub use board::{collect_statistics, JobBoard, SearchPage};
pub use config::Config;
pub use error::CollectError;
pub use headhunter::HeadHunter;
pub use superjob::SuperJob;
pub use transport::{HttpTransport, PageRequest, Transport};
