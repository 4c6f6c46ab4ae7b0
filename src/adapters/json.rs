use anyhow::{Context as _, Result};
use geosort_core::value::{Map, Value};
use serde_json::{Number, Value as Json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Records of type {0} can't be converted into JSON")]
    Record(String),
    #[error("{0} is not a valid JSON number")]
    Number(f64),
}

pub fn from_json(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(v),
        Json::Number(n) => match n.as_i64() {
            Some(v) => Value::Int(v),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        Json::String(v) => Value::String(v),
        Json::Array(items) => Value::Seq(items.into_iter().map(from_json).collect()),
        Json::Object(fields) => Value::Map(
            fields
                .into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<Map>(),
        ),
    }
}

pub fn to_json(value: Value) -> Result<Json, ConversionError> {
    let json = match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(v),
        Value::Int(v) => Json::Number(v.into()),
        Value::Float(v) => Json::Number(Number::from_f64(v).ok_or(ConversionError::Number(v))?),
        Value::String(v) => Json::String(v),
        Value::Seq(items) => Json::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<_, _>>()?,
        ),
        Value::Map(fields) => Json::Object(
            fields
                .into_iter()
                .map(|(k, v)| to_json(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()?,
        ),
        Value::Record(r) => return Err(ConversionError::Record(r.type_name().to_string())),
    };
    Ok(json)
}

pub fn from_str(s: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(s).context("Invalid JSON input")?;
    Ok(from_json(json))
}

pub fn to_string(values: Vec<Value>, pretty: bool) -> Result<String> {
    let json = to_json(Value::Seq(values))?;
    let s = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(s)
}
