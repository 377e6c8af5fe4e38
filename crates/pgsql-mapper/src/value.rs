//! Parameter values carried by a request context and bound by the driver.
//!
//! [`Value`] is a closed set of shapes the datasource operations use. It
//! implements [`ToSql`] so a [`QueryResult`](crate::QueryResult) can be handed
//! to a `tokio-postgres` client as-is.

use bytes::BytesMut;
use chrono::NaiveDateTime;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, WrongType};

/// A single bindable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    /// Integer; narrowed to the column width on bind.
    Int(i64),
    Text(String),
    /// `timestamp without time zone`
    Timestamp(NaiveDateTime),
    /// Multi-valued input, expanded into an IN-list by the mappers.
    TextList(Vec<String>),
}

impl Value {
    /// Borrow the string if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements if this is a `TextList` value.
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for NULL and for text that is empty or all whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Self::Null => Ok(IsNull::Yes),
            Self::Bool(v) => encode(v, ty, out),
            Self::Int(v) => match *ty {
                Type::INT2 => encode(&i16::try_from(*v)?, ty, out),
                Type::INT4 => encode(&i32::try_from(*v)?, ty, out),
                _ => encode(v, ty, out),
            },
            Self::Text(v) => encode(v, ty, out),
            Self::Timestamp(v) => encode(v, ty, out),
            Self::TextList(v) => encode(v, ty, out),
        }
    }

    /// Any type some variant can encode; the variant itself is checked on bind.
    fn accepts(ty: &Type) -> bool {
        <bool as ToSql>::accepts(ty)
            || matches!(*ty, Type::INT2 | Type::INT4)
            || <i64 as ToSql>::accepts(ty)
            || <String as ToSql>::accepts(ty)
            || <NaiveDateTime as ToSql>::accepts(ty)
            || <Vec<String> as ToSql>::accepts(ty)
    }

    tokio_postgres::types::to_sql_checked!();
}

/// Encode `value` only if its Rust type matches the parameter type.
fn encode<T: ToSql>(
    value: &T,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    if !T::accepts(ty) {
        return Err(Box::new(WrongType::new::<T>(ty.clone())));
    }
    value.to_sql(ty, out)
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::TextList(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::TextList(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Self::TextList(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
