use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A book record as it travels over the wire.
///
/// Field names are PascalCase on output. On input they match in any case;
/// when a name appears more than once the last occurrence wins. Missing
/// fields keep their defaults and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "Map<String, Value>")]
pub struct Book {
    /// Identifier of the book
    pub id: i32,
    /// Title of the book
    pub title: Option<String>,
    /// Author of the book
    pub author: Option<String>,
}

#[derive(Deserialize)]
#[serde(default)]
struct BookFields {
    id: i32,
    title: Option<String>,
    author: Option<String>,
}

impl Default for BookFields {
    fn default() -> Self {
        let Book { id, title, author } = Book::default();
        Self { id, title, author }
    }
}

impl TryFrom<Map<String, Value>> for Book {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        // Relies on serde_json's `preserve_order` so the source order decides
        // which of `Id` / `id` is last.
        let folded: Map<String, Value> = fields
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();

        let BookFields { id, title, author } = serde_json::from_value(Value::Object(folded))?;
        Ok(Self { id, title, author })
    }
}
