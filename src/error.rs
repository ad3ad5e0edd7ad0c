pub type RoundifyResult<T> = Result<T, RoundifyError>;

#[derive(thiserror::Error, Debug)]
pub enum RoundifyError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid radius: {0}")]
    InvalidRadius(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoundifyError {
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn invalid_radius(msg: impl Into<String>) -> Self {
        Self::InvalidRadius(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
