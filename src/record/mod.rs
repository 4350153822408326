//! Structured records as table rows.
//!
//! A record type describes its columns through [`Tableify`]: an ordered list
//! of [`ColumnSpec`] built from per-field `tableify` annotations, and the
//! matching list of values. The [`tableify_record!`](crate::tableify_record)
//! macro generates both from a struct definition.
//!
//! Annotation grammar (`#[tableify = "..."]`):
//!
//! - no annotation: the field is not a column
//! - `"-"` or `""`: header is the field name
//! - `"Updated"`: header is `Updated`
//! - `"header,width"`: minimum width (empty means 0)
//! - `"header,width,format"`: explicit printf-style column format

pub mod json;

use crate::errors::{AppError, AppResult};
use crate::value::Value;

/// One column derived from an annotated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    pub width: usize,
    pub format: String,
}

impl ColumnSpec {
    /// Parse the annotation attached to `field`.
    pub fn parse(field: &str, tag: &str) -> AppResult<Self> {
        let mut parts = tag.split(',');
        let header = match parts.next() {
            None | Some("") | Some("-") => field.to_string(),
            Some(h) => h.to_string(),
        };

        let width = match parts.next() {
            None | Some("") => 0,
            Some(w) => w.parse::<usize>().map_err(|_| {
                AppError::InvalidConfiguration(format!(
                    "width of field '{field}' is not an integer: {w}"
                ))
            })?,
        };

        let format = parts.next().unwrap_or_default().to_string();

        Ok(Self {
            header,
            width,
            format,
        })
    }
}

/// Static field mapping of a record type.
pub trait Tableify {
    /// Columns in declared field order, annotated fields only.
    fn columns() -> AppResult<Vec<ColumnSpec>>
    where
        Self: Sized;

    /// Values of the annotated fields, same order as [`Tableify::columns`].
    fn values(&self) -> Vec<Value>;
}

impl<T: Tableify> Tableify for &T {
    fn columns() -> AppResult<Vec<ColumnSpec>> {
        T::columns()
    }

    fn values(&self) -> Vec<Value> {
        (**self).values()
    }
}

impl<T: Tableify> Tableify for Box<T> {
    fn columns() -> AppResult<Vec<ColumnSpec>> {
        T::columns()
    }

    fn values(&self) -> Vec<Value> {
        (**self).values()
    }
}

/// Declare a struct and derive its [`Tableify`] mapping from field annotations.
///
/// ```
/// tableify::tableify_record! {
///     pub struct Repo {
///         #[tableify = "-"]
///         pub name: String,
///         #[tableify = "-,0,%.2f"]
///         pub age: f64,
///         #[tableify = "Updated"]
///         pub last_updated: String,
///         pub desc: String,
///     }
/// }
///
/// let columns = <Repo as tableify::record::Tableify>::columns().unwrap();
/// assert_eq!(columns[1].format, "%.2f");
/// ```
#[macro_export]
macro_rules! tableify_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[tableify = $tag:literal])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $field: $ty, )*
        }

        impl $crate::record::Tableify for $name {
            fn columns() -> $crate::errors::AppResult<::std::vec::Vec<$crate::record::ColumnSpec>> {
                let mut columns = ::std::vec::Vec::new();
                $($(
                    columns.push($crate::record::ColumnSpec::parse(stringify!($field), $tag)?);
                )?)*
                Ok(columns)
            }

            fn values(&self) -> ::std::vec::Vec<$crate::value::Value> {
                let mut values = ::std::vec::Vec::new();
                $($(
                    let _: &str = $tag;
                    values.push($crate::value::ToValue::to_value(&self.$field));
                )?)*
                values
            }
        }
    };
}
