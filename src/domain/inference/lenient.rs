//! Forgiving field deserializers for model-produced JSON.
//!
//! Models drift from the requested schema: capitalised enum values, numbers
//! as strings, a single string where a list was asked for. These helpers map
//! whatever arrives onto the typed field and fall back to the field's neutral
//! value instead of failing the whole object.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::domain::wellness::{Emotion, Intensity, Sentiment, WeeklyTrend};

pub fn emotion<'de, D: Deserializer<'de>>(d: D) -> Result<Emotion, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().map(Emotion::from_name).unwrap_or_default())
}

pub fn sentiment<'de, D: Deserializer<'de>>(d: D) -> Result<Sentiment, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().map(Sentiment::from_name).unwrap_or_default())
}

pub fn weekly_trend<'de, D: Deserializer<'de>>(d: D) -> Result<WeeklyTrend, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().map(WeeklyTrend::from_name).unwrap_or_default())
}

pub fn intensity<'de, D: Deserializer<'de>>(d: D) -> Result<Intensity, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(as_integer(&value)
        .map(Intensity::clamped)
        .unwrap_or_default())
}

pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    })
}

pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    })
}

/// Non-negative whole number; anything unusable becomes 0.
pub fn seconds<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(as_integer(&value)
        .map(|n| n.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0))
}

pub fn object<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, Value>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Object(map) => into_btree(map),
        _ => BTreeMap::new(),
    })
}

fn into_btree(map: Map<String, Value>) -> BTreeMap<String, Value> {
    map.into_iter().collect()
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}
