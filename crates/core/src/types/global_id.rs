//! Relay-style global object identifiers.
//!
//! A global ID is the standard base64 encoding of `<NodeType>:<pk>`, so
//! `User:1` is exposed as `VXNlcjox`. Clients treat it as opaque.

use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Errors that can occur when decoding a [`GlobalId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    /// The input is not valid base64 or not UTF-8.
    #[error("global id is not valid base64")]
    Encoding,
    /// The decoded value has no `Type:pk` separator.
    #[error("global id must have the form Type:pk")]
    MissingSeparator,
    /// The primary key part is not an integer.
    #[error("global id primary key is not an integer")]
    InvalidPrimaryKey,
}

/// An opaque, encoded node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalId(String);

/// The decoded parts of a [`GlobalId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedGlobalId {
    /// GraphQL type name, e.g. `User`.
    pub node_type: String,
    /// Database primary key.
    pub pk: i32,
}

impl DecodedGlobalId {
    /// Returns the primary key if this ID refers to `node_type`.
    #[must_use]
    pub fn pk_for(&self, node_type: &str) -> Option<i32> {
        (self.node_type == node_type).then_some(self.pk)
    }
}

impl GlobalId {
    /// Encode a node type and primary key.
    #[must_use]
    pub fn encode(node_type: &str, pk: i32) -> Self {
        Self(STANDARD.encode(format!("{node_type}:{pk}")))
    }

    /// Decode an encoded global ID into its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not base64, lacks the `:` separator,
    /// or has a non-integer primary key.
    pub fn decode(raw: &str) -> Result<DecodedGlobalId, GlobalIdError> {
        let bytes = STANDARD
            .decode(raw.trim())
            .map_err(|_| GlobalIdError::Encoding)?;
        let text = String::from_utf8(bytes).map_err(|_| GlobalIdError::Encoding)?;
        let (node_type, pk) = text
            .split_once(':')
            .ok_or(GlobalIdError::MissingSeparator)?;
        let pk = pk
            .parse::<i32>()
            .map_err(|_| GlobalIdError::InvalidPrimaryKey)?;

        Ok(DecodedGlobalId {
            node_type: node_type.to_owned(),
            pk,
        })
    }

    /// Returns the encoded form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the encoded string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
