use serde::ser::SerializeStruct;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("invalid status transition: {0}")]
    InvalidTransition(String),
    #[error("no document loaded")]
    NoDocument,
    #[error("internal error: {0}")]
    Internal(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidDocument(_) => "INVALID_DOCUMENT",
            Self::InvalidTransition(_) => "INVALID_TRANSITION",
            Self::NoDocument => "NO_DOCUMENT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidDocument(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn serializes_code_and_message() {
        let err = AppError::InvalidTransition("requirement already approved".to_string());
        let value = serde_json::to_value(&err).expect("serialize error");

        assert_eq!(value["code"], "INVALID_TRANSITION");
        assert_eq!(
            value["message"],
            "invalid status transition: requirement already approved"
        );
    }
}
