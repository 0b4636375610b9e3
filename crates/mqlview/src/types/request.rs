//! MQL read-query templates issued by the view-model.
//!
//! MQL queries are fill-in-the-blanks documents: every field the caller wants
//! the store to return is sent as an explicit `null` placeholder. These
//! records serialize to exactly that wire shape, so placeholder fields are
//! never skipped when `None`.

use serde::Serialize;
use serde_json::Value;

/// Top-level lookup for one resource: `{ "id": ..., "name": null }`.
#[derive(Debug, Clone, Serialize)]
pub struct LookupQuery {
    /// Identifier of the resource to look up.
    pub id: String,
    /// Placeholder for the resource name.
    pub name: Option<String>,
}

impl LookupQuery {
    /// Build a lookup query for one resource id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
        }
    }
}

/// Schema query: every type assigned to a resource, with the property
/// declarations of each type.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaQuery {
    /// Identifier of the resource whose schema is requested.
    pub id: String,
    /// Placeholder for the resource name.
    pub name: Option<String>,
    /// Template for the assigned types.
    #[serde(rename = "ken:type")]
    pub types: Vec<TypeTemplate>,
}

impl SchemaQuery {
    /// Build a schema query for one resource id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            types: vec![TypeTemplate::default()],
        }
    }
}

/// Placeholder block for one assigned type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeTemplate {
    /// Placeholder for the type identifier.
    pub id: Option<String>,
    /// Placeholder for the type name.
    pub name: Option<String>,
    /// Template for the type's property declarations.
    pub properties: Vec<PropertyTemplate>,
}

impl Default for TypeTemplate {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            properties: vec![PropertyTemplate::default()],
        }
    }
}

/// Placeholder block for one property declaration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyTemplate {
    /// Placeholder for the property identifier.
    pub id: Option<String>,
    /// Placeholder for the property name.
    pub name: Option<String>,
    /// Placeholder for the expected value type.
    pub expected_type: Option<String>,
    /// Placeholder for the uniqueness flag.
    pub unique: Option<bool>,
    /// Placeholder for the inverse property identifier.
    pub master_property: Option<String>,
}

/// Reflection query: every link and literal touching a resource, regardless
/// of its declared schema.
#[derive(Debug, Clone, Serialize)]
pub struct ReflectionQuery {
    /// Template for outgoing links where the resource is the source.
    #[serde(rename = "/type/reflect/any_master")]
    pub any_master: Vec<LinkTemplate>,
    /// Template for links pointing at the resource from the other side.
    #[serde(rename = "/type/reflect/any_reverse")]
    pub any_reverse: Vec<LinkTemplate>,
    /// Template for outgoing literal (non-entity) values.
    #[serde(rename = "/type/reflect/any_value")]
    pub any_value: Vec<ValueTemplate>,
    /// Identifier of the reflected resource.
    pub id: String,
}

impl ReflectionQuery {
    /// Build a reflection query for one resource id.
    pub fn new(id: &str) -> Self {
        Self {
            any_master: vec![LinkTemplate::default()],
            any_reverse: vec![LinkTemplate::default()],
            any_value: vec![ValueTemplate::default()],
            id: id.to_string(),
        }
    }
}

/// Placeholder block for one reflected link.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkTemplate {
    /// Placeholder for the linked entity's identifier.
    pub id: Option<String>,
    /// Placeholder for the property the link belongs to.
    pub link: Option<String>,
    /// Placeholder for the linked entity's name.
    pub name: Option<String>,
}

/// Placeholder block for one reflected literal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueTemplate {
    /// Placeholder for the property the value belongs to.
    pub link: Option<String>,
    /// Placeholder for the raw literal value.
    pub value: Option<Value>,
}
