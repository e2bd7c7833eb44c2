use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    #[error("Invalid bezier control points: x1={x1}, x2={x2} (both must lie in [0, 1])")]
    InvalidControlPoints { x1: f64, x2: f64 },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by bad animation settings, as opposed to I/O
    /// or config file problems.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownEasing(_) | Error::InvalidControlPoints { .. } | Error::InvalidSetting(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
