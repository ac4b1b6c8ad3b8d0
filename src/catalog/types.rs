//! Catalog records as exchanged with the upstreams and the client.
//!
//! Decoding is structural only: unknown fields are ignored, and missing or
//! `null` fields take their zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Author identifier as carried by both upstreams.
pub type AuthorId = i64;

/// Author record from the Authors service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub id: AuthorId,
    #[serde(rename = "nombre", deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "apellido", deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(rename = "biografia", deserialize_with = "null_as_default")]
    pub biography: String,
}

impl Author {
    /// `"<first> <last>"`, single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Book record from the Books service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(rename = "ano_publicacion", deserialize_with = "null_as_default")]
    pub publication_year: i64,
    #[serde(rename = "autor_id", deserialize_with = "null_as_default")]
    pub author_id: AuthorId,
}

/// A book with its author name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub book: Book,
    pub author_name: String,
}
