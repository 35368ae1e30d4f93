use std::fmt;
use std::io;
use std::result;

use csv4180_core::{
    Quoting, Terminator, Writer as CoreWriter,
    WriterBuilder as CoreWriterBuilder,
};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, IntoInnerError, Result};
use crate::field::{Field, ToField};
#[cfg(feature = "serde")]
use crate::serializer::serialize;
use crate::sink::Sink;
use crate::stringify::{self, Stringify};

/// Builds a CSV writer with various configuration knobs.
///
/// This builder can be used to tweak the field delimiter, record terminator,
/// quote character and the coercion of non-text values. Once a writer is
/// built, its configuration cannot be changed.
pub struct WriterBuilder {
    builder: CoreWriterBuilder,
    stringify: Stringify,
}

impl Default for WriterBuilder {
    fn default() -> WriterBuilder {
        WriterBuilder {
            builder: CoreWriterBuilder::default(),
            stringify: stringify::standard,
        }
    }
}

impl fmt::Debug for WriterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WriterBuilder")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl WriterBuilder {
    /// Create a new builder for configuring CSV writing.
    ///
    /// To convert a builder into a writer, call one of the methods starting
    /// with `from_`, or `build` for an in-memory writer.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::WriterBuilder;
    ///
    /// let mut wtr = WriterBuilder::new().build();
    /// wtr.write_record(&["a", "b", "c"]).unwrap();
    /// wtr.write_record(&["x", "y", "z"]).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "a,b,c\nx,y,z");
    /// ```
    pub fn new() -> WriterBuilder {
        WriterBuilder::default()
    }

    /// Build a CSV writer from this configuration that accumulates its
    /// output in memory.
    pub fn build(&self) -> Writer<String> {
        self.from_sink(String::new())
    }

    /// Build a CSV writer from this configuration that appends all of its
    /// output to the given sink.
    pub fn from_sink<S: Sink>(&self, sink: S) -> Writer<S> {
        let core = self.builder.build();
        trace!(
            "building CSV writer (delimiter: {:?}, quote: {:?}, terminator: {:?})",
            char::from(core.delimiter()),
            char::from(core.quote()),
            core.terminator()
        );
        Writer { core, sink, stringify: self.stringify, scratch: String::new() }
    }

    /// The field delimiter to use when writing CSV.
    ///
    /// The default is `b','`.
    ///
    /// # Panics
    ///
    /// When `delimiter` is not an ASCII byte.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::WriterBuilder;
    ///
    /// let mut wtr = WriterBuilder::new().delimiter(b';').build();
    /// wtr.write_record(&["a", "b;c"]).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "a;\"b;c\"");
    /// ```
    pub fn delimiter(&mut self, delimiter: u8) -> &mut WriterBuilder {
        self.builder.delimiter(delimiter);
        self
    }

    /// The record terminator to use when writing CSV.
    ///
    /// A record terminator can be any single ASCII byte. The default is
    /// `Terminator::Any(b'\n')`. RFC 4180 spells the terminator as `\r\n`,
    /// which is available as `Terminator::CRLF`.
    ///
    /// # Panics
    ///
    /// When `term` is `Terminator::Any` with a byte that is not ASCII.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::{Terminator, WriterBuilder};
    ///
    /// let mut wtr = WriterBuilder::new().terminator(Terminator::CRLF).build();
    /// wtr.write_record(&["a", "b"]).unwrap();
    /// wtr.write_record(&["x", "y"]).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "a,b\r\nx,y");
    /// ```
    pub fn terminator(&mut self, term: Terminator) -> &mut WriterBuilder {
        self.builder.terminator(term);
        self
    }

    /// The quote character to use when writing CSV.
    ///
    /// The default is `b'"'`.
    ///
    /// # Panics
    ///
    /// When `quote` is not an ASCII byte.
    pub fn quote(&mut self, quote: u8) -> &mut WriterBuilder {
        self.builder.quote(quote);
        self
    }

    /// The function used to turn non-text values into text.
    ///
    /// The default is [`stringify::standard`](crate::stringify::standard).
    ///
    /// # Example
    ///
    /// Writing booleans as `1` and `0`:
    ///
    /// ```
    /// use csv4180::{stringify, Value, WriterBuilder};
    ///
    /// fn binary(value: &Value<'_>, buf: &mut String) {
    ///     match *value {
    ///         Value::Bool(b) => buf.push(if b { '1' } else { '0' }),
    ///         ref other => stringify::standard(other, buf),
    ///     }
    /// }
    ///
    /// let mut wtr = WriterBuilder::new().stringify(binary).build();
    /// wtr.write_record(&[true, false]).unwrap();
    /// wtr.write_record(&[2.5]).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "1,0\n2.5");
    /// ```
    pub fn stringify(&mut self, stringify: Stringify) -> &mut WriterBuilder {
        self.stringify = stringify;
        self
    }
}

/// A writer of RFC 4180 CSV data.
///
/// The writer turns fields into escaped text and hands that text to its
/// [`Sink`]. The default sink is a `String` in memory, whose contents can be
/// read at any time with [`Writer::as_str`].
///
/// Fields are only quoted when they have to be. A field containing the quote
/// character is quoted and has its quotes doubled. Otherwise, a field
/// containing the delimiter, a carriage return, a line feed or the record
/// terminator is quoted as is. All other fields are written unchanged.
/// Absent fields and empty fields are both written as nothing at all.
///
/// Records are separated by the record terminator: there is none before
/// the first record and none after the last one.
///
/// # Example
///
/// ```
/// use csv4180::{Field, Writer};
///
/// let mut wtr = Writer::new();
/// wtr.write_record(&[1, 2, 3]).unwrap();
/// wtr.write_record(&["a", "b,c", "d"]).unwrap();
/// wtr.write_record(&[Field::Absent, Field::Text(""), Field::Text("x")]).unwrap();
///
/// assert_eq!(wtr.as_str(), "1,2,3\na,\"b,c\",d\n,,x");
/// ```
pub struct Writer<S: Sink = String> {
    core: CoreWriter,
    sink: S,
    stringify: Stringify,
    scratch: String,
}

impl<S: Sink + fmt::Debug> fmt::Debug for Writer<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Writer")
            .field("core", &self.core)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

impl Default for Writer<String> {
    fn default() -> Writer<String> {
        Writer::new()
    }
}

impl Writer<String> {
    /// Create a new CSV writer with a default configuration that
    /// accumulates its output in memory.
    ///
    /// To customize the writer, use `WriterBuilder`.
    pub fn new() -> Writer<String> {
        WriterBuilder::new().build()
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.sink
    }

    /// Unwrap this writer, returning all text written to it.
    ///
    /// Unlike `into_inner`, this cannot fail since flushing a `String` is a
    /// no-op.
    pub fn into_string(self) -> String {
        self.sink
    }
}

impl<S: Sink> Writer<S> {
    /// Create a new CSV writer with a default configuration that appends
    /// all of its output to the given sink.
    ///
    /// To customize the writer, use `WriterBuilder`.
    pub fn from_sink(sink: S) -> Writer<S> {
        WriterBuilder::new().from_sink(sink)
    }

    /// Write a single record.
    ///
    /// Unless this is the first record written since the writer was created
    /// or since the last record terminator, a record terminator is written
    /// first. Then each field is written in order with `write_field`.
    ///
    /// An empty iterator still counts as a record: the next record written
    /// will be preceded by a terminator.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::Writer;
    ///
    /// let mut wtr = Writer::new();
    /// wtr.write_record(vec!["line1\nline2"]).unwrap();
    /// wtr.write_record(&[Some(1.5), None]).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "\"line1\nline2\"\n1.5,");
    /// ```
    pub fn write_record<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: ToField,
    {
        self.begin_record()?;
        for field in record {
            self.write_field(field)?;
        }
        Ok(())
    }

    /// Write a record terminator.
    ///
    /// This resets the writer's position: the next field written is the
    /// first of its record and needs no delimiter, and the next call to
    /// `write_record` does not write another terminator.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::Writer;
    ///
    /// let mut wtr = Writer::new();
    /// wtr.write_field("a").unwrap();
    /// wtr.write_field("b").unwrap();
    /// wtr.write_record_separator().unwrap();
    /// wtr.write_field("c").unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "a,b\nc");
    /// ```
    pub fn write_record_separator(&mut self) -> Result<()> {
        let Writer { ref mut core, ref mut sink, .. } = *self;
        core.write_terminator(|s| append(sink, s))?;
        Ok(())
    }

    /// Write a single field.
    ///
    /// A delimiter is written first, unless this is the first field since
    /// the writer was created or since the last record terminator. The field
    /// is then escaped as needed.
    ///
    /// Non-text values are coerced with the writer's stringify function
    /// before escaping.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::Writer;
    ///
    /// let mut wtr = Writer::new();
    /// wtr.write_field("he said \"hi\"").unwrap();
    /// wtr.write_field(None::<&str>).unwrap();
    /// wtr.write_field(42).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "\"he said \"\"hi\"\"\",,42");
    /// ```
    pub fn write_field<T: ToField>(&mut self, field: T) -> Result<()> {
        let Writer { ref mut core, ref mut sink, stringify, ref mut scratch } =
            *self;
        match field.to_field() {
            Field::Absent => core.write_field(None, |s| append(sink, s))?,
            Field::Text(text) => {
                core.write_field(Some(text), |s| append(sink, s))?
            }
            Field::Other(value) => {
                scratch.clear();
                stringify(&value, scratch);
                core.write_field(Some(scratch.as_str()), |s| append(sink, s))?
            }
        }
        Ok(())
    }

    /// Append raw text to the sink.
    ///
    /// The text is not escaped and the writer's position is left unchanged,
    /// so it is up to the caller to keep the output well formed.
    pub fn append(&mut self, text: &str) -> Result<()> {
        append(&mut self.sink, text)?;
        Ok(())
    }

    /// Serialize a single record using Serde.
    ///
    /// Structs, tuples and sequences are written as one field per member,
    /// in order. Nested structs and tuples are flattened
    /// into the same record. A scalar is written as a record with a single
    /// field. `None` and `()` are written as absent fields, unit enum
    /// variants as their name.
    ///
    /// Maps and enum variants carrying tuples or structs cannot be
    /// serialized and return `Error::Serialize`.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::Writer;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Row<'a> {
    ///     city: &'a str,
    ///     population: Option<u64>,
    /// }
    ///
    /// let mut wtr = Writer::new();
    /// wtr.serialize(Row { city: "Boston, MA", population: Some(4628910) }).unwrap();
    /// wtr.serialize(Row { city: "Concord", population: None }).unwrap();
    ///
    /// assert_eq!(wtr.as_str(), "\"Boston, MA\",4628910\nConcord,");
    /// ```
    #[cfg(feature = "serde")]
    pub fn serialize<T: Serialize>(&mut self, record: T) -> Result<()> {
        serialize(self, &record)
    }

    /// Returns true when nothing has been written since the writer was
    /// created or since the last record terminator.
    pub fn is_record_start(&self) -> bool {
        self.core.is_record_start()
    }

    /// Returns true when the next field written is the first of its record.
    pub fn is_field_start(&self) -> bool {
        self.core.is_field_start()
    }

    /// Returns how this writer would quote `field`.
    ///
    /// # Example
    ///
    /// ```
    /// use csv4180::{Quoting, Writer};
    ///
    /// let wtr = Writer::new();
    /// assert_eq!(wtr.quoting("abc"), Quoting::Plain);
    /// assert_eq!(wtr.quoting("a,b"), Quoting::Wrap);
    /// assert_eq!(wtr.quoting("a,\"b\""), Quoting::WrapDouble);
    /// ```
    pub fn quoting(&self, field: &str) -> Quoting {
        self.core.quoting(field)
    }

    /// Flush the sink.
    ///
    /// This is a no-op for the default in-memory sink.
    pub fn flush(&mut self) -> Result<()> {
        trace!("flushing CSV sink");
        self.sink.flush().map_err(|err| {
            debug!("CSV sink failed to flush: {}", err);
            Error::Io(err)
        })
    }

    /// Flush the sink and return it.
    ///
    /// If flushing fails, the writer is handed back inside the error.
    pub fn into_inner(
        mut self,
    ) -> result::Result<S, IntoInnerError<Writer<S>>> {
        match self.sink.flush() {
            Ok(()) => Ok(self.sink),
            Err(err) => {
                debug!("CSV sink failed to flush: {}", err);
                Err(IntoInnerError::new(self, err))
            }
        }
    }

    /// Returns a reference to the sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    ///
    /// Appending to the sink directly bypasses the writer's position
    /// tracking.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Start a record, writing a terminator first if one is owed.
    pub(crate) fn begin_record(&mut self) -> Result<()> {
        let Writer { ref mut core, ref mut sink, .. } = *self;
        core.begin_record(|s| append(sink, s))?;
        Ok(())
    }
}

fn append<S: Sink + ?Sized>(sink: &mut S, text: &str) -> io::Result<()> {
    sink.append(text).map_err(|err| {
        debug!("CSV sink failed to append {} bytes: {}", text.len(), err);
        err
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use csv4180_core::Terminator;

    use super::{Writer, WriterBuilder};
    use crate::error::Error;
    use crate::field::{Field, Value};
    use crate::sink::Sink;
    use crate::stringify;

    fn wtr_as_string(wtr: Writer) -> String {
        wtr.into_string()
    }

    /// Records every append separately.
    #[derive(Debug, Default)]
    struct Chunks(Vec<String>);

    impl Sink for Chunks {
        fn append(&mut self, text: &str) -> io::Result<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    /// Accepts a fixed number of appends, then fails.
    #[derive(Debug)]
    struct Limited {
        out: String,
        left: usize,
        flushes: usize,
    }

    impl Limited {
        fn new(left: usize) -> Limited {
            Limited { out: String::new(), left, flushes: 0 }
        }
    }

    impl Sink for Limited {
        fn append(&mut self, text: &str) -> io::Result<()> {
            if self.left == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
            }
            self.left -= 1;
            self.out.push_str(text);
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            if self.left == 0 {
                Err(io::Error::new(io::ErrorKind::WriteZero, "full"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn one_record() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a", "b", "c"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a,b,c");
    }

    #[test]
    fn numbers() {
        let mut wtr = Writer::new();
        wtr.write_record(&[1, 2, 3]).unwrap();
        assert_eq!(wtr_as_string(wtr), "1,2,3");
    }

    #[test]
    fn embedded_delimiter() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a", "b,c", "d"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a,\"b,c\",d");
    }

    #[test]
    fn embedded_quote() {
        let mut wtr = Writer::new();
        wtr.write_record(&["he said \"hi\""]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\"he said \"\"hi\"\"\"");
    }

    #[test]
    fn embedded_quote_wins_over_delimiter() {
        let mut wtr = Writer::new();
        wtr.write_record(&["\"a\",\r\nb"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\"\"\"a\"\",\r\nb\"");
    }

    #[test]
    fn embedded_newline() {
        let mut wtr = Writer::new();
        wtr.write_record(&["line1\nline2"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\"line1\nline2\"");
    }

    #[test]
    fn embedded_carriage_return() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a\rb", "c"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\"a\rb\",c");
    }

    #[test]
    fn absent_and_empty() {
        let mut wtr = Writer::new();
        wtr.write_record(&[Field::Absent, Field::Text(""), Field::Text("x")])
            .unwrap();
        assert_eq!(wtr_as_string(wtr), ",,x");
    }

    #[test]
    fn absent_equals_empty() {
        let mut absent = Writer::new();
        absent.write_record(&[None, Some("a"), None]).unwrap();
        let mut empty = Writer::new();
        empty.write_record(&["", "a", ""]).unwrap();
        assert_eq!(absent.as_str(), empty.as_str());
        assert_eq!(absent.as_str(), ",a,");
    }

    #[test]
    fn two_records() {
        let mut wtr = Writer::new();
        wtr.write_record(&[1, 2]).unwrap();
        wtr.write_record(&[3, 4]).unwrap();
        assert_eq!(wtr_as_string(wtr), "1,2\n3,4");
    }

    #[test]
    fn no_output() {
        let wtr = Writer::new();
        assert!(wtr.is_record_start());
        assert!(wtr.is_field_start());
        assert_eq!(wtr_as_string(wtr), "");
    }

    #[test]
    fn empty_records() {
        let mut wtr = Writer::new();
        wtr.write_record(Vec::<&str>::new()).unwrap();
        assert!(!wtr.is_record_start());
        assert!(wtr.is_field_start());
        wtr.write_record(Vec::<&str>::new()).unwrap();
        wtr.write_record(&["a"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\n\na");
    }

    #[test]
    fn explicit_separator_is_not_doubled() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a"]).unwrap();
        wtr.write_record_separator().unwrap();
        wtr.write_record(&["b"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a\nb");
    }

    #[test]
    fn fields_then_record() {
        let mut wtr = Writer::new();
        wtr.write_field("a").unwrap();
        wtr.write_record(&["b"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a\nb");
    }

    #[test]
    fn field_by_field() {
        let mut wtr = Writer::new();
        for (i, row) in [["ONE", "TWO"], ["x,y", "\"z\""]].iter().enumerate() {
            if i > 0 {
                wtr.write_record_separator().unwrap();
            }
            for field in row {
                wtr.write_field(field).unwrap();
            }
        }
        assert_eq!(wtr_as_string(wtr), "ONE,TWO\n\"x,y\",\"\"\"z\"\"\"");
    }

    #[test]
    fn blank_record() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a"]).unwrap();
        wtr.write_record(&[""]).unwrap();
        wtr.write_record(&["b"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a\n\nb");

        let mut wtr = Writer::new();
        wtr.write_field("a").unwrap();
        wtr.write_record_separator().unwrap();
        wtr.write_field("").unwrap();
        wtr.write_record_separator().unwrap();
        wtr.write_field("b").unwrap();
        assert_eq!(wtr_as_string(wtr), "a\n\nb");
    }

    #[test]
    fn blank_record_between_separators() {
        let mut wtr = Writer::new();
        wtr.write_record_separator().unwrap();
        wtr.write_record(&["a"]).unwrap();
        wtr.write_field("b").unwrap();
        wtr.write_record(&[""]).unwrap();
        wtr.write_record_separator().unwrap();
        wtr.write_record(&["c"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\na,b\n\nc");
    }

    #[test]
    fn trailing_separator() {
        let mut wtr = Writer::new();
        wtr.write_record(&["a"]).unwrap();
        wtr.write_record_separator().unwrap();
        assert_eq!(wtr_as_string(wtr), "a\n");
    }

    #[test]
    fn append_is_raw() {
        let mut wtr = Writer::new();
        wtr.append("# comment, \"raw\"\n").unwrap();
        wtr.write_field("a").unwrap();
        wtr.write_field("b").unwrap();
        assert_eq!(wtr_as_string(wtr), "# comment, \"raw\"\na,b");
    }

    #[test]
    fn crlf_terminator() {
        let mut wtr = WriterBuilder::new().terminator(Terminator::CRLF).build();
        wtr.write_record(&["a", "b"]).unwrap();
        wtr.write_record(&["c\r\nd"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a,b\r\n\"c\r\nd\"");
    }

    #[test]
    fn custom_terminator_is_quoted() {
        let mut wtr = WriterBuilder::new().terminator(Terminator::Any(b'|')).build();
        wtr.write_record(&["a|b", "c"]).unwrap();
        wtr.write_record(&["d"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "\"a|b\",c|d");
    }

    #[test]
    fn tab_delimiter() {
        let mut wtr = WriterBuilder::new().delimiter(b'\t').build();
        wtr.write_record(&["a,b", "c\td"]).unwrap();
        assert_eq!(wtr_as_string(wtr), "a,b\t\"c\td\"");
    }

    #[test]
    fn single_quote() {
        let mut wtr = WriterBuilder::new().quote(b'\'').build();
        wtr.write_record(&["it's", "a,b", "\"q\""]).unwrap();
        assert_eq!(wtr_as_string(wtr), "'it''s','a,b',\"q\"");
    }

    #[test]
    fn mixed_values() {
        let mut wtr = Writer::new();
        wtr.write_field(true).unwrap();
        wtr.write_field(-7i8).unwrap();
        wtr.write_field(0.25f64).unwrap();
        wtr.write_field('c').unwrap();
        wtr.write_field(&b"raw"[..]).unwrap();
        wtr.write_field(String::from("owned")).unwrap();
        assert_eq!(wtr_as_string(wtr), "true,-7,0.25,c,raw,owned");
    }

    #[test]
    fn stringified_values_are_escaped() {
        struct Pair(i32, i32);

        impl std::fmt::Display for Pair {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{},{}", self.0, self.1)
            }
        }

        let mut wtr = Writer::new();
        wtr.write_field(Field::display(&Pair(1, 2))).unwrap();
        wtr.write_field('"').unwrap();
        assert_eq!(wtr_as_string(wtr), "\"1,2\",\"\"\"\"");
    }

    #[test]
    fn custom_stringify() {
        fn quiet(value: &Value<'_>, buf: &mut String) {
            match *value {
                Value::F64(v) if v.is_nan() => {}
                ref other => stringify::standard(other, buf),
            }
        }

        let mut wtr = WriterBuilder::new().stringify(quiet).build();
        wtr.write_record(&[1.0, f64::NAN, 2.5]).unwrap();
        assert_eq!(wtr_as_string(wtr), "1.0,,2.5");
    }

    #[test]
    fn independent_writers() {
        let mut a = Writer::new();
        let mut b = Writer::new();
        a.write_record(&["a1"]).unwrap();
        b.write_record(&["b1", "b2"]).unwrap();
        a.write_record(&["a2"]).unwrap();
        assert_eq!(a.as_str(), "a1\na2");
        assert_eq!(b.as_str(), "b1,b2");
    }

    #[test]
    fn output_readable_any_time() {
        let mut wtr = Writer::new();
        wtr.write_field("a").unwrap();
        assert_eq!(wtr.as_str(), "a");
        wtr.write_field("b").unwrap();
        assert_eq!(wtr.as_str(), "a,b");
        assert_eq!(wtr.get_ref(), "a,b");
    }

    #[test]
    fn appends_in_call_order() {
        let mut wtr = Writer::from_sink(Chunks::default());
        wtr.write_record(&["a", "b,c"]).unwrap();
        wtr.write_record(&["x\"y"]).unwrap();
        let chunks = wtr.into_inner().unwrap().0;
        assert_eq!(
            chunks,
            vec!["a", ",", "\"", "b,c", "\"", "\n", "\"", "x\"", "\"", "y", "\""]
        );
    }

    #[test]
    fn borrowed_sink() {
        let mut out = String::new();
        {
            let mut wtr = Writer::from_sink(&mut out);
            wtr.write_record(&["a", "b"]).unwrap();
        }
        out.push('!');
        assert_eq!(out, "a,b!");
    }

    #[test]
    fn sink_error_leaves_prefix() {
        let mut wtr = Writer::from_sink(Limited::new(3));
        wtr.write_field("a").unwrap();
        let err = wtr.write_field("b,c").unwrap_err();
        match err {
            Error::Io(ref err) => assert_eq!(err.kind(), io::ErrorKind::WriteZero),
            err => panic!("unexpected error: {}", err),
        }
        assert_eq!(wtr.get_ref().out, "a,\"");
    }

    #[test]
    fn flush_reaches_sink() {
        let mut wtr = Writer::from_sink(Limited::new(10));
        wtr.write_field("a").unwrap();
        wtr.flush().unwrap();
        assert_eq!(wtr.get_ref().flushes, 1);
        let sink = wtr.into_inner().unwrap();
        assert_eq!(sink.flushes, 2);
        assert_eq!(sink.out, "a");
    }

    #[test]
    fn into_inner_failure_returns_writer() {
        let mut wtr = Writer::from_sink(Limited::new(1));
        wtr.write_field("a").unwrap();
        let err = wtr.into_inner().unwrap_err();
        assert_eq!(err.error().kind(), io::ErrorKind::WriteZero);
        let wtr = err.into_inner();
        assert_eq!(wtr.get_ref().out, "a");
    }
}
