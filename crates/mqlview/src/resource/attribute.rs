//! Resolved attribute values and their tagged value shapes.

use std::fmt;

use serde_json::Value;

use crate::schema::Property;

/// One raw value surfaced by reflection: either the entity on the far end of
/// a link, or a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectedValue {
    /// The entity on the far end of a link.
    Entity {
        /// Identifier of the linked entity, when the store reported one.
        id: Option<String>,
        /// Name of the linked entity.
        name: Option<String>,
    },
    /// A literal (non-entity) value.
    Literal(Value),
}

impl fmt::Display for ReflectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity { id, name } => {
                let text = name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .or(id.as_deref())
                    .unwrap_or("");
                f.write_str(text)
            }
            Self::Literal(Value::String(text)) => f.write_str(text),
            Self::Literal(other) => write!(f, "{other}"),
        }
    }
}

/// Value shape of an attribute, fixed at construction by the owning
/// property's `unique` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// The single value of a unique property.
    Unique(ReflectedValue),
    /// The ordered values of a non-unique property.
    Multiple(Vec<ReflectedValue>),
}

/// The resolved value(s) of one property on one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    property: Property,
    value: AttributeValue,
}

impl Attribute {
    /// Build an attribute from matched reflection values and the property
    /// they resolve. A unique property keeps only the first matched value.
    pub fn create(values: Vec<ReflectedValue>, property: Property) -> Self {
        let value = if property.unique() {
            match values.into_iter().next() {
                Some(first) => AttributeValue::Unique(first),
                // A unique property matched by an empty group keeps an empty
                // sequence rather than inventing a value.
                None => AttributeValue::Multiple(Vec::new()),
            }
        } else {
            AttributeValue::Multiple(values)
        };
        Self { property, value }
    }

    /// The property this attribute resolves.
    pub fn property(&self) -> &Property {
        &self.property
    }

    /// The resolved value in its declared shape.
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// The resolved values as a slice, regardless of shape.
    pub fn values(&self) -> &[ReflectedValue] {
        match &self.value {
            AttributeValue::Unique(value) => std::slice::from_ref(value),
            AttributeValue::Multiple(values) => values,
        }
    }

    /// Whether this attribute holds a single unique value.
    pub fn is_unique(&self) -> bool {
        matches!(self.value, AttributeValue::Unique(_))
    }
}
