//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::error::{ContentError, Result};

/// Accepts either a single string or a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                if let Some(tag) = scalar_text(item).map_err(<S::Error as de::Error>::custom)? {
                    vec.push(tag);
                }
            }
            Ok(vec)
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts any YAML scalar as text, so `title: 1984` stays a string
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => scalar_text(value).map_err(D::Error::custom),
    }
}

fn scalar_text(value: serde_yaml::Value) -> std::result::Result<Option<String>, String> {
    use serde_yaml::Value;

    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected a scalar, found {:?}", other)),
    }
}

/// Metadata block at the top of a post file.
///
/// Every field is optional; defaults are applied when the [`Post`](super::Post)
/// is built, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub slug: Option<String>,
    #[serde(rename = "coverImage", deserialize_with = "scalar_string")]
    pub cover_image: Option<String>,

    /// Keys this crate does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a file into its front-matter and body.
    ///
    /// Text without a `---` block (or with an unterminated one) is all body.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let Some((yaml, body)) = split_block(content) else {
            return Ok((FrontMatter::default(), content));
        };

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)?;
        Ok((fm, body))
    }

    /// Slug override, ignoring an empty value
    pub fn slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    /// Parse the `date` field, `None` when it is absent
    pub fn parse_date(&self) -> Result<Option<DateTime<Utc>>> {
        match non_empty(&self.date) {
            None => Ok(None),
            Some(s) => parse_date_string(s)
                .map(Some)
                .ok_or_else(|| ContentError::InvalidDate(s.to_string())),
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Locate a `---` delimited block at the very start of the text.
/// Returns the block contents and the remaining body.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let first_line_end = content.find('\n').unwrap_or(content.len());
    if content[..first_line_end].trim_end() != "---" {
        return None;
    }

    let rest = content.get(first_line_end + 1..)?;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            // The closing line carries its own line break; the body starts after it
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

/// Parse a date string in the formats authors commonly write
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let with_offset = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%z"];
    for fmt in with_offset {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in naive {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
