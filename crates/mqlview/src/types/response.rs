//! Typed views of MQL query responses.
//!
//! Responses parse leniently: the store reports empty result sets as `null`
//! and omits fields it knows nothing about, so arrays tolerate `null` and
//! scalar fields are optional.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Result of a [`SchemaQuery`](crate::types::SchemaQuery).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaResponse {
    /// Echoed resource identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Resource name, when the store knows one.
    #[serde(default)]
    pub name: Option<String>,
    /// Declared types with their property schemas.
    #[serde(rename = "ken:type", default, deserialize_with = "null_as_empty")]
    pub types: Vec<TypeRecord>,
}

/// One declared type in a schema response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Type identifier.
    #[serde(default)]
    pub id: String,
    /// Type name.
    #[serde(default)]
    pub name: Option<String>,
    /// Property declarations, in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Vec<PropertyRecord>,
}

/// One property declaration in a schema response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Property identifier.
    #[serde(default)]
    pub id: String,
    /// Property name.
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier of the expected value type. Informational only.
    #[serde(default)]
    pub expected_type: Option<String>,
    /// Whether at most one value is expected. Absent means non-unique.
    #[serde(default)]
    pub unique: Option<bool>,
    /// Identifier of the inverse property, used to match reverse links.
    #[serde(default)]
    pub master_property: Option<String>,
}

/// Result of a [`ReflectionQuery`](crate::types::ReflectionQuery): every link
/// and literal touching one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionResponse {
    /// Outgoing links where the resource is the source.
    #[serde(
        rename = "/type/reflect/any_master",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub any_master: Vec<LinkedEntity>,
    /// Links pointing at the resource from the other side.
    #[serde(
        rename = "/type/reflect/any_reverse",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub any_reverse: Vec<LinkedEntity>,
    /// Outgoing literal (non-entity) values.
    #[serde(
        rename = "/type/reflect/any_value",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub any_value: Vec<LinkedLiteral>,
    /// Echoed resource identifier.
    #[serde(default)]
    pub id: Option<String>,
}

/// One graph edge reported by reflection: `link` names the property, `id` and
/// `name` describe the entity on the far end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedEntity {
    /// Property the link belongs to.
    #[serde(default)]
    pub link: String,
    /// Identifier of the entity on the far end.
    #[serde(default)]
    pub id: Option<String>,
    /// Name of the entity on the far end.
    #[serde(default)]
    pub name: Option<String>,
}

/// One literal value reported by reflection under the property named `link`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedLiteral {
    /// Property the value belongs to.
    #[serde(default)]
    pub link: String,
    /// The raw literal value.
    #[serde(default)]
    pub value: Value,
}

/// MQL reports empty result sets as `null`; treat them as empty arrays.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
