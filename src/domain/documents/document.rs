#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything carrying a `document_type` tag.
pub trait DocumentLike {
    fn document_type(&self) -> &str;
}

/// Document record as returned by the documents API.
///
/// Only `document_type` drives categorization; every other field is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    #[must_use]
    pub fn of_type(document_type: impl Into<String>) -> Self {
        Self {
            id: None,
            document_type: document_type.into(),
            file_name: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl DocumentLike for Document {
    fn document_type(&self) -> &str {
        &self.document_type
    }
}

impl<T: DocumentLike + ?Sized> DocumentLike for &T {
    fn document_type(&self) -> &str {
        (**self).document_type()
    }
}
