//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmalError {
    #[error("INPUT/{0}")]
    Input(String),

    #[error("GEO/{0}")]
    Geo(String),

    #[error("CYCLE/{0}")]
    Cycle(String),

    #[error("CONFIG/{0}")]
    Config(String),
}
