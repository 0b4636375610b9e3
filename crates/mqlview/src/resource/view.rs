//! Per-type projections of a resource.

use crate::collection::Identified;
use crate::schema::Type;

use super::attribute::Attribute;

/// A projection of one resource through one of its declared types.
///
/// Views own a copy of the resource's display info and the type they project,
/// so they stay usable independently of the resource's later loads.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    resource_id: String,
    resource_name: String,
    ty: Type,
}

impl View {
    pub(crate) fn new(resource_id: &str, resource_name: &str, ty: Type) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            resource_name: resource_name.to_string(),
            ty,
        }
    }

    /// Identifier of the resource being viewed.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Name of the resource being viewed.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// The declared type this view projects.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The subset of `attributes` whose property is declared by this view's
    /// type, in the order they were resolved.
    pub fn select_attributes<'a>(&self, attributes: &'a [Attribute]) -> Vec<&'a Attribute> {
        attributes
            .iter()
            .filter(|attribute| {
                self.ty
                    .properties()
                    .find_by_id(attribute.property().id())
                    .is_some()
            })
            .collect()
    }
}

impl Identified for View {
    fn id(&self) -> &str {
        self.ty.id()
    }

    fn name(&self) -> &str {
        self.ty.name()
    }
}
