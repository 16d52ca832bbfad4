use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavbarError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item {0} is not mounted yet")]
    Unmeasured(usize),

    #[error("Measurement failed: {0}")]
    Measurement(String),
}

pub type Result<T> = std::result::Result<T, NavbarError>;
