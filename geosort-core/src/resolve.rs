// Evaluation of a single path segment against a dynamic value.

use crate::value::Value;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

pub type MethodError = Box<dyn StdError + Send + Sync>;

/// A structured value with named fields and
/// optional zero-argument accessor methods.
pub trait Record: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &str;

    fn field(&self, name: &str) -> Option<Value>;

    /// Invoke the accessor method `name`.
    ///
    /// Returns `None` if the record has no such method.
    fn call(&self, _name: &str) -> Option<Result<Value, MethodError>> {
        None
    }
}

/// Capability to resolve a named path segment.
pub trait Resolve {
    fn resolve(&self, segment: &str) -> Result<Value, ResolveError>;
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("can't evaluate a nil value by a struct field or map key name {segment}")]
    Nil { segment: String },
    #[error("{segment} isn't a field of struct type {type_name}")]
    Field { segment: String, type_name: String },
    #[error("{segment} isn't a key of map type {type_name}")]
    Key { segment: String, type_name: String },
    #[error("error at calling a method {segment} of type {type_name}: {source}")]
    Method {
        segment: String,
        type_name: String,
        source: MethodError,
    },
    #[error("{segment} is neither a struct field, a method nor a map element of type {type_name}")]
    NotTraversable { segment: String, type_name: String },
}

impl Resolve for dyn Record {
    fn resolve(&self, segment: &str) -> Result<Value, ResolveError> {
        // Methods take precedence over fields of the same name.
        if let Some(res) = self.call(segment) {
            return res.map_err(|source| ResolveError::Method {
                segment: segment.to_string(),
                type_name: self.type_name().to_string(),
                source,
            });
        }
        self.field(segment).ok_or_else(|| ResolveError::Field {
            segment: segment.to_string(),
            type_name: self.type_name().to_string(),
        })
    }
}

impl Resolve for Value {
    fn resolve(&self, segment: &str) -> Result<Value, ResolveError> {
        match self {
            Value::Null => Err(ResolveError::Nil {
                segment: segment.to_string(),
            }),
            Value::Record(record) => record.as_ref().resolve(segment),
            Value::Map(map) => map.get(segment).cloned().ok_or_else(|| ResolveError::Key {
                segment: segment.to_string(),
                type_name: self.type_name(),
            }),
            _ => Err(ResolveError::NotTraversable {
                segment: segment.to_string(),
                type_name: self.type_name(),
            }),
        }
    }
}
