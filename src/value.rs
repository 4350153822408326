//! Cell values accepted by a Table.
//!
//! Rows are heterogeneous, so every cell is carried as a [`Value`] until the
//! table formats it. Conversions exist for the primitive types, strings, raw
//! bytes, `Option<T>` and the chrono date/time types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt;
use std::rc::Rc;

/// Types that know how to render themselves as a single cell.
///
/// The default formatter checks this capability before any built-in rule.
pub trait Stringify {
    fn stringify(&self) -> String;
}

#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    Custom(Rc<dyn Stringify>),
}

impl Value {
    /// Wrap a value exposing its own string representation.
    pub fn custom<S: Stringify + 'static>(value: S) -> Self {
        Value::Custom(Rc::new(value))
    }

    /// Short type label used in printf diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "i64",
            Value::UInt(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Custom(_) => "custom",
        }
    }
}

/// Generic human-readable form (`%v`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::F32(x) => write!(f, "{x}"),
            Value::F64(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Bytes(bytes) => {
                let parts: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
                write!(f, "[{}]", parts.join(" "))
            }
            Value::Custom(c) => f.write_str(&c.stringify()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Custom(c) => write!(f, "Custom({:?})", c.stringify()),
            other => write!(f, "{}({})", other.type_name(), other),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Rc<dyn Stringify>> for Value {
    fn from(v: Rc<dyn Stringify>) -> Self {
        Value::Custom(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Nil,
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Str(v.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value
where
    Tz::Offset: fmt::Display,
{
    fn from(v: DateTime<Tz>) -> Self {
        Value::Str(v.to_string())
    }
}

/// Converts a borrowed record field into a cell value.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl<T> ToValue for T
where
    T: Clone + Into<Value>,
{
    fn to_value(&self) -> Value {
        self.clone().into()
    }
}

/// Build a heterogeneous row: `row!["Bob", 30, 1.5]`.
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::value::Value::from($value)),*]
    };
}
