use thiserror::Error;

/// Configuration errors reported by [`crate::Hades::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HadesError {
    #[error("viewport cannot be undefined")]
    MissingViewport,
    #[error("container cannot be undefined")]
    MissingContainer,
}

pub(crate) type Result<T> = core::result::Result<T, HadesError>;
