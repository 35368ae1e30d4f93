/*!
Coercion of non-text field values into text.

A writer holds one [`Stringify`] function and calls it for every
[`Field::Other`](crate::Field::Other) it is asked to write. The function
appends the textual form of the value to a scratch buffer, which the writer
then escapes like any other text. [`standard`] is used unless the writer was
built with a different one.
*/

use std::fmt::Write;

use bstr::ByteSlice;

use crate::field::Value;

/// A function that appends the textual form of `value` to `buf`.
///
/// `buf` is empty when the function is called. Leaving it empty writes an
/// empty field. Stringification cannot fail.
pub type Stringify = fn(value: &Value<'_>, buf: &mut String);

/// The default coercion.
///
/// Integers are written in decimal and floats in their shortest form that
/// reads back to the same value (`1.0`, `0.1`, `1e20`). Non-finite floats
/// are written as `NaN`, `inf` and `-inf`. Booleans are `true` or `false`.
/// Bytes that are not valid UTF-8 have their invalid sequences replaced by
/// `U+FFFD`.
pub fn standard(value: &Value<'_>, buf: &mut String) {
    match *value {
        Value::Bool(v) => buf.push_str(if v { "true" } else { "false" }),
        Value::I64(v) => buf.push_str(itoa::Buffer::new().format(v)),
        Value::U64(v) => buf.push_str(itoa::Buffer::new().format(v)),
        Value::I128(v) => buf.push_str(itoa::Buffer::new().format(v)),
        Value::U128(v) => buf.push_str(itoa::Buffer::new().format(v)),
        Value::F32(v) => float(v, buf),
        Value::F64(v) => float(v, buf),
        Value::Char(v) => buf.push(v),
        Value::Bytes(v) => buf.push_str(&v.to_str_lossy()),
        Value::Display(v) => {
            let _ = write!(buf, "{}", v);
        }
    }
}

fn float<F: ryu::Float + Copy + Into<f64>>(v: F, buf: &mut String) {
    let wide: f64 = v.into();
    if wide.is_nan() {
        buf.push_str("NaN");
    } else if wide.is_infinite() {
        buf.push_str(if wide > 0.0 { "inf" } else { "-inf" });
    } else {
        buf.push_str(ryu::Buffer::new().format_finite(v));
    }
}
