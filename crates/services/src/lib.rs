#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz;
pub mod remediation;
pub mod search;

pub use config::QuizConfig;
pub use error::{QuizError, SearchError};
pub use quiz::{QuizRequest, SessionController};
pub use remediation::RemediationGenerator;
pub use search::{DuckDuckGoSearch, NO_RESULTS, SearchProvider};
