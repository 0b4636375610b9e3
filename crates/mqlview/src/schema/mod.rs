//! Immutable schema value objects: types and their property declarations.

use crate::collection::{Collection, Identified};
use crate::types::{PropertyRecord, TypeRecord};

/// A schema classification assigned to a resource, bundling a set of property
/// declarations. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    id: String,
    name: String,
    properties: Collection<Property>,
}

impl Type {
    /// Build a type from its raw schema record.
    pub fn from_record(record: TypeRecord) -> Self {
        let properties = record
            .properties
            .into_iter()
            .map(Property::from_record)
            .collect();
        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            properties,
        }
    }

    /// Type identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Type name, empty when the store reported none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property declarations, in declaration order.
    pub fn properties(&self) -> &Collection<Property> {
        &self.properties
    }
}

impl Identified for Type {
    fn id(&self) -> &str {
        self.id()
    }

    fn name(&self) -> &str {
        self.name()
    }
}

/// A named, typed slot declared by a type. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    id: String,
    name: String,
    expected_type: Option<String>,
    unique: bool,
    master_property: Option<String>,
}

impl Property {
    /// Build a property from its raw schema record. `unique` defaults to
    /// false when the store reports nothing.
    pub fn from_record(record: PropertyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            expected_type: record.expected_type,
            unique: record.unique.unwrap_or(false),
            master_property: record.master_property,
        }
    }

    /// Property identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Property name, empty when the store reported none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the expected value type, when declared. Informational
    /// only: values are never validated against it.
    pub fn expected_type(&self) -> Option<&str> {
        self.expected_type.as_deref()
    }

    /// Whether at most one value is expected.
    pub fn unique(&self) -> bool {
        self.unique
    }

    /// Identifier of the inverse property, used to match reverse links.
    pub fn master_property(&self) -> Option<&str> {
        self.master_property.as_deref()
    }
}

impl Identified for Property {
    fn id(&self) -> &str {
        self.id()
    }

    fn name(&self) -> &str {
        self.name()
    }
}
