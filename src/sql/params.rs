//! Owned bind values that sqlx can encode for the `Any` driver.

use sqlx::any::{Any, AnyTypeInfo};
use sqlx::encode::{Encode, IsNull};
use sqlx::Database;

/// A value bound to a query parameter. Every column of `items` is one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    I64(i64),
    F64(f64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::I64(n)
    }
}

impl From<f64> for BindValue {
    fn from(n: f64) -> Self {
        BindValue::F64(n)
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl<'q> Encode<'q, Any> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Any as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::I64(n) => <i64 as Encode<Any>>::encode_by_ref(n, buf),
            BindValue::F64(n) => <f64 as Encode<Any>>::encode_by_ref(n, buf),
            BindValue::Text(s) => <String as Encode<Any>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Any> for BindValue {
    fn type_info() -> AnyTypeInfo {
        <String as sqlx::Type<Any>>::type_info()
    }
}
