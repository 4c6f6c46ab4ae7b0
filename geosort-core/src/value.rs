use crate::resolve::Record;
use std::{collections::BTreeMap, fmt, sync::Arc};

pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value as it is handed over by a template host.
#[derive(Debug, Clone)]
pub enum Value {
    /// An absent value, e.g. an empty optional or a nil pointer.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<Value>),
    Map(Map),
    Record(Arc<dyn Record>),
}

impl Value {
    pub fn record<R: Record + 'static>(record: R) -> Self {
        Self::Record(Arc::new(record))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric values as `f64`, everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the runtime type used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Null => "nil".into(),
            Self::Bool(_) => "bool".into(),
            Self::Int(_) => "int".into(),
            Self::Float(_) => "float".into(),
            Self::String(_) => "string".into(),
            Self::Seq(_) => "seq".into(),
            Self::Map(_) => "map".into(),
            Self::Record(r) => r.type_name().into(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Records have no structural equality, only identity.
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("<nil>"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Seq(_) | Self::Map(_) | Self::Record(_) => write!(f, "{self:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(from: bool) -> Self {
        Self::Bool(from)
    }
}

impl From<i64> for Value {
    fn from(from: i64) -> Self {
        Self::Int(from)
    }
}

impl From<f64> for Value {
    fn from(from: f64) -> Self {
        Self::Float(from)
    }
}

impl From<&str> for Value {
    fn from(from: &str) -> Self {
        Self::String(from.to_string())
    }
}

impl From<String> for Value {
    fn from(from: String) -> Self {
        Self::String(from)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(from: Option<T>) -> Self {
        from.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<Vec<Value>> for Value {
    fn from(from: Vec<Value>) -> Self {
        Self::Seq(from)
    }
}

impl From<Map> for Value {
    fn from(from: Map) -> Self {
        Self::Map(from)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
