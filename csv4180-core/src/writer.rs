use memchr::{memchr, memchr3, memchr_iter};

/// A record terminator.
///
/// Use this to specify the record terminator while writing CSV data. The
/// default is `Any(b'\n')`, which is what most programs expect. RFC 4180
/// spells the terminator as `\r\n`; pick `CRLF` for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Terminator {
    /// Writes `\r\n` after each record.
    CRLF,
    /// Writes the given ASCII byte after each record.
    Any(u8),
}

impl Default for Terminator {
    fn default() -> Terminator {
        Terminator::Any(b'\n')
    }
}

/// How a single field must be written to survive a round trip through an
/// RFC 4180 parser.
///
/// The variants are mutually exclusive. `Writer::quoting` checks them in
/// priority order: a quote byte anywhere in the field always selects
/// `WrapDouble`, even when the field also contains a delimiter or a line
/// break.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quoting {
    /// The field is written as is.
    Plain,
    /// The field is wrapped in quotes without any other change.
    Wrap,
    /// The field is wrapped in quotes and every quote inside it is doubled.
    WrapDouble,
}

/// A builder for configuring a CSV writer.
///
/// This builder permits specifying the CSV delimiter, terminator and quote.
#[derive(Debug)]
pub struct WriterBuilder {
    wtr: Writer,
}

impl Default for WriterBuilder {
    fn default() -> WriterBuilder {
        WriterBuilder::new()
    }
}

impl WriterBuilder {
    /// Create a new builder for configuring a CSV writer.
    pub fn new() -> WriterBuilder {
        WriterBuilder { wtr: Writer::default() }
    }

    /// Build a CSV writer from this configuration.
    pub fn build(&self) -> Writer {
        self.wtr
    }

    /// The field delimiter to use when writing CSV.
    ///
    /// The default is `b','`.
    ///
    /// # Panics
    ///
    /// When `delimiter` is not ASCII.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut WriterBuilder {
        assert!(delimiter.is_ascii(), "delimiter must be an ASCII byte");
        self.wtr.delimiter = delimiter;
        self
    }

    /// The record terminator to use when writing CSV.
    ///
    /// The default is `Terminator::Any(b'\n')`.
    ///
    /// # Panics
    ///
    /// When `term` is `Terminator::Any` with a byte that is not ASCII.
    pub fn terminator(&mut self, term: Terminator) -> &mut WriterBuilder {
        if let Terminator::Any(b) = term {
            assert!(b.is_ascii(), "terminator must be an ASCII byte");
        }
        self.wtr.term = term;
        self
    }

    /// The quote character to use when writing CSV.
    ///
    /// The default value is `b'"'`.
    ///
    /// # Panics
    ///
    /// When `quote` is not ASCII.
    pub fn quote(&mut self, quote: u8) -> &mut WriterBuilder {
        assert!(quote.is_ascii(), "quote must be an ASCII byte");
        self.wtr.quote = quote;
        self
    }
}

/// A writer for CSV data.
///
/// This writer owns no output. Every method takes an `emit` callback and
/// hands it borrowed slices of text in output order, which means the
/// writer never allocates. The caller decides where the text goes and what
/// kind of error writing it may produce.
///
/// The writer tracks its position in the output with two flags. One says
/// whether a record has been started since the last record terminator (so
/// that `begin_record` knows whether a terminator is owed). The other says
/// whether a field has been written since the last record terminator (so
/// that `write_field` knows whether a delimiter is owed).
///
/// # RFC 4180
///
/// This writer conforms to RFC 4180 with one exception: it doesn't guarantee
/// that all records written are of the same length. Instead, the onus is on
/// the caller to ensure that all records written are of the same length.
#[derive(Clone, Copy, Debug)]
pub struct Writer {
    record_start: bool,
    field_start: bool,
    delimiter: u8,
    term: Terminator,
    quote: u8,
}

impl Default for Writer {
    fn default() -> Writer {
        Writer {
            record_start: true,
            field_start: true,
            delimiter: b',',
            term: Terminator::default(),
            quote: b'"',
        }
    }
}

impl Writer {
    /// Creates a new CSV writer with the default configuration.
    pub fn new() -> Writer {
        Writer::default()
    }

    /// The configured field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// The configured record terminator.
    pub fn terminator(&self) -> Terminator {
        self.term
    }

    /// The configured quote character.
    pub fn quote(&self) -> u8 {
        self.quote
    }

    /// Returns true when nothing has been written since construction or
    /// since the last record terminator.
    pub fn is_record_start(&self) -> bool {
        self.record_start
    }

    /// Returns true when the next field written needs no delimiter in front
    /// of it.
    pub fn is_field_start(&self) -> bool {
        self.field_start
    }

    /// Decide how `field` must be written.
    pub fn quoting(&self, field: &str) -> Quoting {
        let bytes = field.as_bytes();
        if memchr(self.quote, bytes).is_some() {
            return Quoting::WrapDouble;
        }
        if memchr3(self.delimiter, b'\r', b'\n', bytes).is_some() {
            return Quoting::Wrap;
        }
        match self.term {
            Terminator::Any(b) if memchr(b, bytes).is_some() => Quoting::Wrap,
            _ => Quoting::Plain,
        }
    }

    /// Start a new record.
    ///
    /// If a record was already started since the last terminator, then a
    /// terminator is emitted first. Either way, the writer afterwards
    /// considers a record started, even if no field is ever written to it.
    pub fn begin_record<E, F>(&mut self, mut emit: F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        if !self.record_start {
            self.write_terminator(&mut emit)?;
        }
        self.record_start = false;
        Ok(())
    }

    /// Write a single field.
    ///
    /// A delimiter is emitted first unless this is the first field since
    /// the last terminator. `None` and the empty string emit nothing else.
    pub fn write_field<E, F>(
        &mut self,
        field: Option<&str>,
        mut emit: F,
    ) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        if !self.field_start {
            let mut buf = [0; 4];
            emit(ascii(self.delimiter, &mut buf))?;
        }
        self.field_start = false;
        self.record_start = false;

        let field = match field {
            None => return Ok(()),
            Some(field) if field.is_empty() => return Ok(()),
            Some(field) => field,
        };
        let mut buf = [0; 4];
        let quote = ascii(self.quote, &mut buf);
        match self.quoting(field) {
            Quoting::Plain => emit(field),
            Quoting::Wrap => {
                emit(quote)?;
                emit(field)?;
                emit(quote)
            }
            Quoting::WrapDouble => {
                emit(quote)?;
                let mut start = 0;
                for i in memchr_iter(self.quote, field.as_bytes()) {
                    // The quote byte is ASCII, so `i + 1` is a char boundary.
                    emit(&field[start..i + 1])?;
                    emit(quote)?;
                    start = i + 1;
                }
                if start < field.len() {
                    emit(&field[start..])?;
                }
                emit(quote)
            }
        }
    }

    /// Write a record terminator.
    ///
    /// Afterwards, the next field written needs no delimiter and the next
    /// record begun needs no terminator.
    pub fn write_terminator<E, F>(&mut self, mut emit: F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        match self.term {
            Terminator::CRLF => emit("\r\n")?,
            Terminator::Any(b) => {
                let mut buf = [0; 4];
                emit(ascii(b, &mut buf))?;
            }
        }
        self.record_start = true;
        self.field_start = true;
        Ok(())
    }
}

fn ascii(byte: u8, buf: &mut [u8; 4]) -> &str {
    char::from(byte).encode_utf8(buf)
}
