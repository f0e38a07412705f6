use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Reserved key holding positional arguments.
pub const POSITIONAL_KEY: &str = "_";

/// A single list element.
///
/// Lists are normally strings, but a key first seen as a boolean flag and
/// later given a value keeps the `true` as its first element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Str(String),
}

/// Value stored under an option key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Str(String),
    List(Vec<Scalar>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Fold another occurrence of the same key into this value.
    ///
    /// A scalar becomes `[existing, next]`; a list grows by one element.
    fn push(&mut self, next: Scalar) {
        match self {
            Self::List(items) => items.push(next),
            Self::Bool(b) => {
                let prev = Scalar::Bool(*b);
                *self = Self::List(vec![prev, next]);
            }
            Self::Str(s) => {
                let prev = Scalar::Str(std::mem::take(s));
                *self = Self::List(vec![prev, next]);
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => Self::Bool(b),
            Scalar::Str(s) => Self::Str(s),
        }
    }
}

/// Parsed arguments: option keys in first-seen order plus positionals.
///
/// Serializes as a JSON object whose last field is always `_`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResult {
    options: IndexMap<String, Value>,
    positional: Vec<String>,
}

impl ParsedResult {
    /// Get the value recorded for an option key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Positional arguments (the `_` field), in input order.
    pub fn positional(&self) -> &[String] {
        self.positional.as_slice()
    }

    /// Iterate option keys and values in first-seen order.
    ///
    /// The positional list is not included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of option keys (excluding `_`).
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option keys were recorded. Positionals are not counted.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl ParsedResult {
    pub(crate) fn record(&mut self, key: String, value: Scalar) {
        match self.options.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                self.options.insert(key, value.into());
            }
        }
    }

    pub(crate) fn push_positional(&mut self, value: String) {
        self.positional.push(value);
    }

    pub(crate) fn extend_positional<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.positional.extend(values);
    }

    /// Drop an option that collides with the reserved `_` key.
    pub(crate) fn take_reserved(&mut self) -> Option<Value> {
        self.options.shift_remove(POSITIONAL_KEY)
    }
}

impl Serialize for ParsedResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.options.len() + 1))?;
        for (key, value) in &self.options {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(POSITIONAL_KEY, &self.positional)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParsedResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ParsedResultVisitor)
    }
}

struct ParsedResultVisitor;

impl<'de> Visitor<'de> for ParsedResultVisitor {
    type Value = ParsedResult;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of parsed arguments with a `_` array")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut options = IndexMap::new();
        let mut positional: Option<Vec<String>> = None;

        while let Some(key) = access.next_key::<String>()? {
            if key == POSITIONAL_KEY {
                if positional.is_some() {
                    return Err(de::Error::duplicate_field(POSITIONAL_KEY));
                }
                positional = Some(access.next_value()?);
                continue;
            }
            if options.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key `{key}`")));
            }
            let value: Value = access.next_value()?;
            options.insert(key, value);
        }

        let positional = positional.ok_or_else(|| de::Error::missing_field(POSITIONAL_KEY))?;
        Ok(ParsedResult {
            options,
            positional,
        })
    }
}
