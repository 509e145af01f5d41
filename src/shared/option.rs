//! Optional values on the wire.
//!
//! The content API encodes "maybe a value" results as a tagged shape,
//! `{"kind":"Some","value":...}` or `{"kind":"None"}`. Callers normalise
//! that shape into a plain [`Option`] at the boundary with [`normalize`]
//! before any other code looks at it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum WireOption<T> {
    Some(T),
    None,
}

impl<T> From<Option<T>> for WireOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => WireOption::Some(v),
            None => WireOption::None,
        }
    }
}

/// Anything a peer may send where an optional value is expected: the tagged
/// shape, an explicit `null`, or an already-plain value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionalPayload<T> {
    Tagged(WireOption<T>),
    Plain(Option<T>),
}

impl<T> OptionalPayload<T> {
    pub fn normalize(self) -> Option<T> {
        match self {
            OptionalPayload::Tagged(tagged) => normalize(tagged),
            OptionalPayload::Plain(plain) => plain,
        }
    }
}

pub fn normalize<T>(value: WireOption<T>) -> Option<T> {
    match value {
        WireOption::Some(v) => Some(v),
        WireOption::None => None,
    }
}
