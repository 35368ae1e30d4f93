use std::error;
use std::fmt;
use std::io;
use std::result;

/// A type alias for `Result<T, csv4180::Error>`.
pub type Result<T> = result::Result<T, Error>;

/// An error that can occur when writing CSV data.
///
/// Note that writing to the default in-memory `String` sink never fails.
/// Errors only come from a custom [`Sink`](crate::Sink) or, with the `serde`
/// feature, from values that have no CSV representation.
#[derive(Debug)]
pub enum Error {
    /// An I/O error reported by the sink.
    Io(io::Error),
    /// A value could not be serialized as a CSV record.
    Serialize(String),
}

impl Error {
    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(*self, Error::Io(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(err) => err,
            err => io::Error::new(io::ErrorKind::Other, err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Serialize(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Serialize(ref msg) => {
                write!(f, "CSV write error: {}", msg)
            }
        }
    }
}

/// `IntoInnerError` occurs when consuming a `Writer` fails.
///
/// Consuming the `Writer` causes a flush of its sink to happen. If the flush
/// fails, then this error is returned, which contains both the original
/// `Writer` and the error that occurred.
///
/// The type parameter `W` is the unconsumed writer.
pub struct IntoInnerError<W> {
    wtr: W,
    err: io::Error,
}

impl<W> IntoInnerError<W> {
    /// Creates a new `IntoInnerError`.
    pub(crate) fn new(wtr: W, err: io::Error) -> IntoInnerError<W> {
        IntoInnerError { wtr, err }
    }

    /// Returns the error which caused the call to `into_inner` to fail.
    ///
    /// This error was returned when attempting to flush the sink.
    pub fn error(&self) -> &io::Error {
        &self.err
    }

    /// Returns the underlying writer which generated the error.
    ///
    /// The returned value can be used for error recovery, such as
    /// re-inspecting the sink.
    pub fn into_inner(self) -> W {
        self.wtr
    }
}

impl<W: std::any::Any> error::Error for IntoInnerError<W> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.err)
    }
}

impl<W> fmt::Display for IntoInnerError<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl<W> fmt::Debug for IntoInnerError<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.err.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::io;

    use super::Error;

    #[test]
    fn io_round_trip() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.is_io_error());
        assert!(err.source().is_some());
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn serialize_message() {
        let err = Error::Serialize("nested sequences".to_string());
        assert!(!err.is_io_error());
        assert_eq!(err.to_string(), "CSV write error: nested sequences");
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::Other);
    }
}
