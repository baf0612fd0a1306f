/// Coarse state of a screen's data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState<T> {
    /// A fetch is in flight
    #[default]
    Loading,
    /// Last fetch succeeded
    Success(T),
    /// Last fetch failed; carries the message shown to the user
    Error(String),
}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Loaded data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Transform the loaded data, keeping loading and error states as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> UiState<U> {
        match self {
            Self::Loading => UiState::Loading,
            Self::Success(data) => UiState::Success(f(data)),
            Self::Error(message) => UiState::Error(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for UiState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}
