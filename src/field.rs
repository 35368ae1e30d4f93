use std::borrow::Cow;
use std::fmt;

/// A single field value, before it is escaped and written.
///
/// Text is written as given. Everything that is not already text is carried
/// as a [`Value`] and coerced by the writer's stringify function (see
/// [`WriterBuilder::stringify`](crate::WriterBuilder::stringify)). An absent
/// field writes nothing at all, which a parser reads back as an empty field.
#[derive(Clone, Copy)]
pub enum Field<'a> {
    /// No value. Written exactly like the empty string.
    Absent,
    /// Text that only needs escaping.
    Text(&'a str),
    /// A value that must be stringified first.
    Other(Value<'a>),
}

/// A non-text field value.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    I64(i64),
    /// An unsigned integer.
    U64(u64),
    /// A wide signed integer.
    I128(i128),
    /// A wide unsigned integer.
    U128(u128),
    /// A single precision float.
    F32(f32),
    /// A double precision float.
    F64(f64),
    /// A single character.
    Char(char),
    /// Raw bytes, which are not necessarily valid UTF-8.
    Bytes(&'a [u8]),
    /// Anything else that knows how to display itself.
    Display(&'a dyn fmt::Display),
}

impl<'a> Field<'a> {
    /// A field for any value implementing `Display`.
    pub fn display(value: &'a dyn fmt::Display) -> Field<'a> {
        Field::Other(Value::Display(value))
    }

    /// Returns true if this field is `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(*self, Field::Absent)
    }
}

impl<'a> fmt::Debug for Field<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Field::Absent => write!(f, "Absent"),
            Field::Text(s) => f.debug_tuple("Text").field(&s).finish(),
            Field::Other(ref v) => f.debug_tuple("Other").field(v).finish(),
        }
    }
}

impl<'a> fmt::Debug for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Bool(v) => f.debug_tuple("Bool").field(&v).finish(),
            Value::I64(v) => f.debug_tuple("I64").field(&v).finish(),
            Value::U64(v) => f.debug_tuple("U64").field(&v).finish(),
            Value::I128(v) => f.debug_tuple("I128").field(&v).finish(),
            Value::U128(v) => f.debug_tuple("U128").field(&v).finish(),
            Value::F32(v) => f.debug_tuple("F32").field(&v).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(&v).finish(),
            Value::Char(v) => f.debug_tuple("Char").field(&v).finish(),
            Value::Bytes(v) => f.debug_tuple("Bytes").field(&v).finish(),
            Value::Display(v) => {
                f.debug_tuple("Display").field(&format_args!("{}", v)).finish()
            }
        }
    }
}

/// Conversion of a value into a CSV field.
///
/// This is what `Writer::write_field` and `Writer::write_record` accept.
/// It is implemented for strings, the primitive number types, `bool`,
/// `char`, `Option<T>` (where `None` is an absent field) and references to
/// any of these. To write some other type, either implement this trait for
/// it or wrap it with [`Field::display`].
pub trait ToField {
    /// Borrow this value as a field.
    fn to_field(&self) -> Field<'_>;
}

impl<'a, T: ToField + ?Sized> ToField for &'a T {
    fn to_field(&self) -> Field<'_> {
        (**self).to_field()
    }
}

impl<'a, T: ToField + ?Sized> ToField for &'a mut T {
    fn to_field(&self) -> Field<'_> {
        (**self).to_field()
    }
}

impl<'a> ToField for Field<'a> {
    fn to_field(&self) -> Field<'_> {
        *self
    }
}

impl<'a> ToField for Value<'a> {
    fn to_field(&self) -> Field<'_> {
        Field::Other(*self)
    }
}

impl ToField for str {
    fn to_field(&self) -> Field<'_> {
        Field::Text(self)
    }
}

impl ToField for String {
    fn to_field(&self) -> Field<'_> {
        Field::Text(self)
    }
}

impl<'a> ToField for Cow<'a, str> {
    fn to_field(&self) -> Field<'_> {
        Field::Text(self)
    }
}

impl ToField for [u8] {
    fn to_field(&self) -> Field<'_> {
        Field::Other(Value::Bytes(self))
    }
}

impl<T: ToField> ToField for Option<T> {
    fn to_field(&self) -> Field<'_> {
        match *self {
            None => Field::Absent,
            Some(ref v) => v.to_field(),
        }
    }
}

impl ToField for () {
    fn to_field(&self) -> Field<'_> {
        Field::Absent
    }
}

macro_rules! to_field_value {
    ($($ty:ty => $variant:ident as $into:ty),* $(,)?) => {
        $(
            impl ToField for $ty {
                fn to_field(&self) -> Field<'_> {
                    Field::Other(Value::$variant(*self as $into))
                }
            }
        )*
    };
}

to_field_value! {
    bool => Bool as bool,
    char => Char as char,
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    isize => I64 as i64,
    i128 => I128 as i128,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    u128 => U128 as u128,
    f32 => F32 as f32,
    f64 => F64 as f64,
}
