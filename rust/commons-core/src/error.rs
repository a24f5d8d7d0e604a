use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn illegal_state(operation: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::IllegalState {
                operation: operation.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsupported(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::Unsupported {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn no_such_element() -> Error {
        Error(ErrorKind::NoSuchElement.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Wraps an error raised by application code, e.g. a page query behind a
    /// lazy loading provider.
    pub fn external<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::External {
                context: context.into(),
                source: Box::new(source),
            }
            .into(),
        )
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self.kind(), ErrorKind::IllegalState { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), ErrorKind::Unsupported { .. })
    }

    pub fn is_no_such_element(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoSuchElement)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("illegal state for {operation}: {message}")]
    IllegalState { operation: String, message: String },

    #[error("unsupported operation {operation}")]
    Unsupported { operation: String },

    #[error("no such element")]
    NoSuchElement,

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    External {
        context: String,
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
