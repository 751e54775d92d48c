use crate::{OpaqueError, opaque::Message};
use std::{
    error::Error,
    fmt::{self, Debug, Display},
};

/// Adds a context message to the error of a `Result`, or to a missing `Option` value.
///
/// The original error stays available as source of the resulting [`OpaqueError`],
/// see [`OpaqueError::find`].
///
/// ```
/// use jaws_error::ErrorContext;
///
/// let err = "AQAB!".parse::<u32>().context("decode exponent").unwrap_err();
/// assert_eq!(err.to_string(), "decode exponent: invalid digit found in string");
/// assert!(err.find::<std::num::ParseIntError>().is_some());
/// ```
pub trait ErrorContext: sealed::Sealed {
    /// The value carried on success.
    type Value;

    /// Add a context message to the error.
    fn context<M>(self, context: M) -> Result<Self::Value, OpaqueError>
    where
        M: Display + Send + Sync + 'static;

    /// Add a context message, only built when there is an error.
    fn with_context<M, F>(self, context: F) -> Result<Self::Value, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
        F: FnOnce() -> M;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    type Value = T;

    fn context<M>(self, context: M) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
    {
        self.with_context(|| context)
    }

    fn with_context<M, F>(self, context: F) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
        F: FnOnce() -> M,
    {
        self.map_err(|error| {
            OpaqueError::from_std(ContextError {
                context: context(),
                error,
            })
        })
    }
}

impl<T> ErrorContext for Option<T> {
    type Value = T;

    fn context<M>(self, context: M) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
    {
        self.with_context(|| context)
    }

    fn with_context<M, F>(self, context: F) -> Result<T, OpaqueError>
    where
        M: Display + Send + Sync + 'static,
        F: FnOnce() -> M,
    {
        self.ok_or(Message("value is missing")).with_context(context)
    }
}

struct ContextError<C, E> {
    context: C,
    error: E,
}

impl<C: Display, E: Debug> Debug for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextError")
            .field("context", &format_args!("{}", self.context))
            .field("error", &self.error)
            .finish()
    }
}

impl<C: Display, E: Display> Display for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl<C: Display, E: Error + 'static> Error for ContextError<C, E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> Sealed for Option<T> {}
}
