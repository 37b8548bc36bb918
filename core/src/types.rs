//! Payload types exchanged with the posts service and the image endpoint.
//!
//! # Design
//! `Record` stays an opaque JSON value: the remote service owns its schema
//! and nothing here validates it. The mock-server crate defines its own
//! concrete post type; integration tests catch drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A structured value returned by the posts endpoint, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Value);

impl Record {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Record {
    fn from(value: serde_json::Value) -> Self {
        Record(value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request payload for `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub const DEMO_TITLE: &'static str = "peticion POST";
    pub const DEMO_BODY: &'static str = "Esto es una prueba de peticion POST";

    /// The fixed payload sent by `submit_item`.
    pub fn demo() -> Self {
        Self {
            title: Self::DEMO_TITLE.to_string(),
            body: Self::DEMO_BODY.to_string(),
        }
    }
}

/// Raw image bytes plus the media type the server declared, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl BinaryPayload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
