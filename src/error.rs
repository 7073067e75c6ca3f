//! Error type shared by every pipeline stage

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("session_not_found")]
    SessionNotFound,
    #[error("slab_full")]
    SlabFull,
}

impl Error {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<Error> for rustler::Error {
    fn from(value: Error) -> Self {
        rustler::Error::Term(Box::new(value.to_string()))
    }
}

/// Convert a signed length coming from the BEAM into a strictly positive usize
pub fn positive_len(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::invalid(name, format!("must be positive, got {}", value)));
    }
    usize::try_from(value).map_err(|_| Error::invalid(name, format!("{} does not fit in usize", value)))
}
