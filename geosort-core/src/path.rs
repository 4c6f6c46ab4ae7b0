use crate::resolve::{Resolve, ResolveError};
use crate::value::Value;
use std::fmt;

const SEPARATOR: char = '.';

/// A dotted path into nested elements, e.g. `location.pos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Leading and trailing separators are ignored.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.split(SEPARATOR).map(ToString::to_string).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Walk the path starting at `elem`.
    ///
    /// Returns `None` for an empty path, i.e. if `elem` itself is the target.
    pub fn walk<T>(&self, elem: &T) -> Result<Option<Value>, ResolveError>
    where
        T: Resolve + ?Sized,
    {
        let mut segments = self.segments();
        let Some(first) = segments.next() else {
            return Ok(None);
        };
        let mut value = elem.resolve(first)?;
        for segment in segments {
            value = value.resolve(segment)?;
        }
        Ok(Some(value))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(from: &str) -> Self {
        Self::parse(from)
    }
}
