/*!
`csv4180-core` provides the escaping and positioning rules for writing
RFC 4180 CSV data, without any allocation and without the standard library.

Most users should use the `csv4180` crate instead, which owns an output
buffer and converts arbitrary values into fields.

# Overview

The [`Writer`] holds the configuration (delimiter, quote and record
terminator) and remembers whether it sits at the start of a record and at
the start of a field. Its methods hand borrowed slices of text to a caller
supplied callback, in output order:

```
use csv4180_core::Writer;

let mut out = String::new();
let mut emit = |s: &str| -> Result<(), ()> {
    out.push_str(s);
    Ok(())
};

let mut wtr = Writer::new();
wtr.begin_record(&mut emit).unwrap();
wtr.write_field(Some("a"), &mut emit).unwrap();
wtr.write_field(Some("b,c"), &mut emit).unwrap();
wtr.begin_record(&mut emit).unwrap();
wtr.write_field(Some("say \"hi\""), &mut emit).unwrap();
drop(emit);
assert_eq!(out, "a,\"b,c\"\n\"say \"\"hi\"\"\"");
```
*/

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

pub use crate::writer::{Quoting, Terminator, Writer, WriterBuilder};

mod writer;
