use crate::theme::ThemeError;
use thiserror::Error;

pub type ToolkitResult<T> = std::result::Result<T, ToolkitError>;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_errors_keep_their_message() {
        let err: ToolkitError = ThemeError::MissingHomeDirectory.into();
        assert!(matches!(err, ToolkitError::Theme(_)));
        assert_eq!(err.to_string(), "missing HOME environment variable");
    }
}
