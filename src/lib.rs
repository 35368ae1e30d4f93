/*!
The `csv4180` crate writes tabular data as comma separated values that
conform to [RFC 4180](https://tools.ietf.org/html/rfc4180).

A [`Writer`] takes records, which are sequences of fields, and turns them
into text. A field is quoted only when it must be: fields containing the
quote character are quoted with every quote doubled, fields containing the
delimiter or a line break are quoted as is, and everything else is written
unchanged. Absent and empty fields are written as nothing at all. Records
are separated by a record terminator, with none before the first record and
none after the last.

This crate does not parse CSV data.

# Example

```
use csv4180::Writer;

let mut wtr = Writer::new();
wtr.write_record(&["city", "population"]).unwrap();
wtr.write_record(&["Boston, MA", "4628910"]).unwrap();
wtr.write_record(&[Some("Concord"), None]).unwrap();

assert_eq!(wtr.as_str(), "\
city,population
\"Boston, MA\",4628910
Concord,");
```

# Fields

Anything implementing [`ToField`] can be written: strings, the primitive
number types, `bool`, `char` and `Option`s of those. Values that are not
text already are coerced by the writer's [`Stringify`] function, which can
be replaced with [`WriterBuilder::stringify`].

# Sinks

By default, a writer accumulates its output in a `String`. Implementing
[`Sink`] lets a writer send its output anywhere else. Writing to the default
sink never fails.

# Serde

With the `serde` feature (enabled by default), [`Writer::serialize`] writes
any `Serialize` type, such as a struct or a tuple, as one record.
*/

#![deny(missing_docs)]

pub use csv4180_core::{Quoting, Terminator};

pub use crate::error::{Error, IntoInnerError, Result};
pub use crate::field::{Field, ToField, Value};
pub use crate::sink::Sink;
pub use crate::stringify::Stringify;
pub use crate::writer::{Writer, WriterBuilder};

mod error;
mod field;
#[cfg(feature = "serde")]
mod serializer;
mod sink;
pub mod stringify;
mod writer;
