//! Command implementations

pub mod check;
pub mod random;
pub mod report;
pub mod settings;
pub mod survey;

pub use check::{WordCheck, check_word};
pub use random::{random_puzzle, seeded_rng};
pub use report::build_report;
pub use settings::{DataSource, Settings, load_puzzle};
pub use survey::{SurveyConfig, SurveyEntry, SurveyResult, run_survey};
