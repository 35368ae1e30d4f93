use std::io;

/// The destination of a CSV writer's output.
///
/// A writer produces its output exclusively through `append`, in the exact
/// order in which its public methods were called. The default sink is a
/// `String` that accumulates everything in memory, but any type that can
/// take text (a socket, a file, a channel) can implement this trait.
///
/// # Example
///
/// A sink that counts bytes instead of keeping them:
///
/// ```
/// use std::io;
///
/// use csv4180::{Sink, Writer};
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl Sink for Counter {
///     fn append(&mut self, text: &str) -> io::Result<()> {
///         self.0 += text.len();
///         Ok(())
///     }
/// }
///
/// let mut wtr = Writer::from_sink(Counter::default());
/// wtr.write_record(&["a", "b,c"]).unwrap();
/// assert_eq!(wtr.get_ref().0, "a,\"b,c\"".len());
/// ```
pub trait Sink {
    /// Append raw text to this sink.
    ///
    /// If this returns an error, the writer stops writing the current field
    /// or record and reports the error. Everything appended before the error
    /// stays appended.
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Flush any text buffered by this sink to its final destination.
    ///
    /// The default does nothing.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for String {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

impl<'a, S: Sink + ?Sized> Sink for &'a mut S {
    fn append(&mut self, text: &str) -> io::Result<()> {
        (**self).append(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        (**self).append(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
