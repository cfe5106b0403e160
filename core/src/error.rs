use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("Invalid argument '{argument}': {detail}")]
    InvalidArgument {
        argument: &'static str,
        detail: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CreditError {
    pub fn invalid(argument: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            detail: detail.into(),
        }
    }
}

pub type CreditResult<T> = Result<T, CreditError>;
