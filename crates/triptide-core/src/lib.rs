pub mod app_config;
pub mod config;
pub mod filter;
pub mod image;
pub mod listing;
pub mod survey;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{apply_filters, FilterCriteria, PriceRange, RatingFilter, SortKey};
pub use image::{
    destination_image, resolve_image, DESTINATION_FALLBACK_IMAGE, IMAGE_BASE_PATH, PLACEHOLDER_IMAGE,
};
pub use listing::{
    flatten_stays, parse_numeric_price, DestinationCard, DestinationsFile, Listing, StaysFile,
};
pub use survey::{
    calculate_sus, SurveyResponse, OUT_OF_RANGE_PROMPT, QUESTION_COUNT, QUESTION_NAMES,
    UNANSWERED_PROMPT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid price range \"{0}\"; expected \"all\", \"<min>\", \"<min>-\" or \"<min>-<max>\"")]
    InvalidPriceRange(String),

    #[error("invalid minimum rating \"{0}\"; expected \"all\" or a number")]
    InvalidRating(String),

    #[error("unknown sort key \"{0}\"")]
    InvalidSortKey(String),

    #[error("question {question} has not been answered")]
    UnansweredQuestion { question: &'static str },

    #[error("question {question} has score {value}; scores must be between 1 and 5")]
    ScoreOutOfRange { question: &'static str, value: u8 },
}
