//! Argument values bound to SQL placeholders.

use crate::error::FragResult;
use serde::Serialize;

/// A value bound positionally to a placeholder in rendered SQL.
///
/// The renderer never inspects arguments; it only forwards them to the
/// argument sink in the order the fragments declare them. Structured caller
/// values go through [`Arg::json`].
///
/// # Example
/// ```
/// use sqlfrag::Arg;
///
/// let a: Arg = 42.into();
/// let b: Arg = "active".into();
/// let c = Arg::json(&vec!["x", "y"])?;
/// assert_eq!(a, Arg::Int(42));
/// assert_eq!(b, Arg::Text("active".to_string()));
/// assert_eq!(c, Arg::Json(serde_json::json!(["x", "y"])));
/// # Ok::<(), sqlfrag::FragError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// SQL NULL.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Any structured value, carried as JSON.
    Json(serde_json::Value),
}

impl Arg {
    /// Convert any serializable value into a JSON argument.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> FragResult<Self> {
        Ok(Arg::Json(serde_json::to_value(value)?))
    }

    /// Check if this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(UInt, u64: u8, u16, u32, u64);

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(f64::from(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Text(v)
    }
}

impl From<Vec<u8>> for Arg {
    fn from(v: Vec<u8>) -> Self {
        Arg::Bytes(v)
    }
}

impl From<serde_json::Value> for Arg {
    fn from(v: serde_json::Value) -> Self {
        Arg::Json(v)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Null, Into::into)
    }
}

/// Build a `Vec<Arg>` from a list of values convertible into [`Arg`].
///
/// ```
/// use sqlfrag::Arg;
///
/// let args = sqlfrag::args![1, "x", None::<i32>];
/// assert_eq!(args, vec![Arg::Int(1), Arg::Text("x".to_string()), Arg::Null]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}
