use crate::BoxError;
use std::{
    error::Error,
    fmt::{self, Debug, Display},
};

/// Type-erased error returned by fallible jaws functions.
///
/// Wrapping another [`OpaqueError`] never nests it, so the error kind created
/// at the failure site stays the one inspected by [`OpaqueError::is`] and
/// [`OpaqueError::downcast_ref`]. Errors which were given a context message
/// are reachable through [`OpaqueError::find`].
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Wrap a concrete error.
    pub fn from_std(error: impl Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Create an error which only carries a message.
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(Message(msg))
    }

    /// Wrap a boxed error, unwrapping it when it already is an [`OpaqueError`].
    pub fn from_boxed(inner: BoxError) -> Self {
        match inner.downcast::<Self>() {
            Ok(opaque) => *opaque,
            Err(inner) => Self(inner),
        }
    }

    /// Consume this error, returning the boxed error.
    pub fn into_boxed(self) -> BoxError {
        self.0
    }

    /// Returns true if the wrapped error is a `T`.
    pub fn is<T: Error + 'static>(&self) -> bool {
        self.0.is::<T>()
    }

    /// The wrapped error as `T`, if it is one.
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Take out the wrapped error as `T`, or get this error back.
    pub fn downcast<T: Error + 'static>(self) -> Result<T, Self> {
        self.0.downcast::<T>().map(|error| *error).map_err(Self)
    }

    /// The first `T` found walking from the wrapped error through its sources.
    pub fn find<T: Error + 'static>(&self) -> Option<&T> {
        let head: &(dyn Error + 'static) = &*self.0;
        // an OpaqueError source forwards to the source of the error it wraps
        std::iter::successors(Some(head), |&error| error.source()).find_map(|error| {
            match error.downcast_ref::<Self>() {
                Some(opaque) => opaque.0.downcast_ref::<T>(),
                None => error.downcast_ref::<T>(),
            }
        })
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for OpaqueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl From<BoxError> for OpaqueError {
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

pub(crate) struct Message<M>(pub(crate) M);

impl<M: Debug> Debug for Message<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M: Display> Display for Message<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display + Debug> Error for Message<M> {}
