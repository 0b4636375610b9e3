//! The resource entity and its lazy schema/attribute loading.

mod attribute;
mod view;

pub use attribute::{Attribute, AttributeValue, ReflectedValue};
pub use view::View;

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::collection::Collection;
use crate::schema::{Property, Type};
use crate::session::MqlSession;
use crate::types::{
    Error, LinkedEntity, LinkedLiteral, ReflectionQuery, ReflectionResponse, Result, SchemaQuery,
    SchemaResponse, TypeRecord,
};

/// Record key under which a resource may carry embedded schema data.
const SCHEMA_KEY: &str = "ken:type";
/// Record key under which a resource may carry embedded reflection data.
const ATTRIBUTE_KEY: &str = "ken:attribute";

/// Per-facet load state: not loaded until a successful fetch stores a value,
/// loaded and immutable from then on.
#[derive(Debug)]
struct Lazy<T> {
    loaded: Option<T>,
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self { loaded: None }
    }
}

impl<T> Lazy<T> {
    fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Move the loaded value out, leaving the facet not loaded.
    fn take(&mut self) -> Option<T> {
        self.loaded.take()
    }

    /// Store a loaded value and borrow it back.
    fn insert(&mut self, value: T) -> &T {
        self.loaded.insert(value)
    }
}

/// A single typed entity backed by the knowledge graph.
///
/// Wraps one already-fetched top-level record and loads its two facets — the
/// type schema and the resolved attributes — lazily through the injected
/// session. The exclusive-borrow accessors make concurrent first loads of the
/// same instance impossible, so no locking is needed.
pub struct Resource {
    data: Map<String, Value>,
    session: Arc<dyn MqlSession>,
    schema: Lazy<Collection<Type>>,
    views: Lazy<Collection<View>>,
    attributes: Lazy<Vec<Attribute>>,
}

impl Resource {
    /// Wrap an already-fetched record. No query is issued; the record may
    /// embed schema (`"ken:type"`) and reflection (`"ken:attribute"`) data
    /// that later loads reuse instead of querying.
    pub fn new(data: Value, session: Arc<dyn MqlSession>) -> Result<Self> {
        let data = match data {
            Value::Object(map) => map,
            other => return Err(Error::construction(&other)),
        };
        Ok(Self {
            data,
            session,
            schema: Lazy::default(),
            views: Lazy::default(),
            attributes: Lazy::default(),
        })
    }

    /// Raw identifier from the record, empty when absent.
    pub fn id(&self) -> &str {
        self.data.get("id").and_then(Value::as_str).unwrap_or("")
    }

    /// Raw name from the record, empty when absent.
    pub fn name(&self) -> &str {
        self.data.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// Name if present, else id, else the empty string.
    pub fn display_string(&self) -> &str {
        if self.name().is_empty() {
            self.id()
        } else {
            self.name()
        }
    }

    /// Whether the type schema has been loaded.
    pub fn schema_loaded(&self) -> bool {
        self.schema.is_loaded()
    }

    /// Whether attributes have been resolved.
    pub fn attributes_loaded(&self) -> bool {
        self.attributes.is_loaded()
    }

    /// All types assigned to this resource, loading the schema on first
    /// access. Memoized for the lifetime of the instance; session failures
    /// propagate unchanged.
    pub fn types(&mut self) -> Result<&Collection<Type>> {
        let types = match self.schema.take() {
            Some(types) => types,
            None => self
                .schema_records()?
                .into_iter()
                .map(Type::from_record)
                .collect(),
        };
        Ok(self.schema.insert(types))
    }

    /// One view per assigned type, computed lazily and memoized.
    pub fn views(&mut self) -> Result<&Collection<View>> {
        let views = match self.views.take() {
            Some(views) => views,
            None => {
                let id = self.id().to_string();
                let name = self.name().to_string();
                self.types()?
                    .iter()
                    .map(|ty| View::new(&id, &name, ty.clone()))
                    .collect()
            }
        };
        Ok(self.views.insert(views))
    }

    /// The flattened union of every assigned type's properties, in type order
    /// then declaration order. Recomputed on every call; duplicates across
    /// types are preserved.
    pub fn properties(&mut self) -> Result<Collection<Property>> {
        let mut properties = Collection::new();
        for ty in self.types()? {
            properties.concat(ty.properties().clone());
        }
        Ok(properties)
    }

    /// Every resolved attribute, loading reflection data (and the schema, if
    /// not yet loaded) on first access. Cached in resolution order for the
    /// lifetime of the instance.
    pub fn attributes(&mut self) -> Result<&[Attribute]> {
        let attributes = match self.attributes.take() {
            Some(attributes) => attributes,
            None => {
                let reflection = self.reflection_data()?;
                let properties = self.properties()?;
                let attributes = resolve_attributes(reflection, &properties);
                tracing::debug!(id = self.id(), count = attributes.len(), "attributes resolved");
                attributes
            }
        };
        Ok(self.attributes.insert(attributes))
    }

    /// Embedded schema payload when present, otherwise one schema query whose
    /// payload is stored back into the record for reuse.
    fn schema_records(&mut self) -> Result<Vec<TypeRecord>> {
        // An embedded null means the store reported nothing; treat it as absent.
        if let Some(embedded) = self.data.get(SCHEMA_KEY).filter(|v| !v.is_null()) {
            tracing::debug!(id = self.id(), "reusing embedded schema data");
            return Ok(serde_json::from_value(embedded.clone())?);
        }
        let query = serde_json::to_value(SchemaQuery::new(self.id()))?;
        let response = self.session.mql_read(query)?;
        let schema: SchemaResponse = serde_json::from_value(response)?;
        tracing::debug!(id = self.id(), types = schema.types.len(), "schema fetched");
        let records = schema.types;
        self.data
            .insert(SCHEMA_KEY.to_string(), serde_json::to_value(&records)?);
        Ok(records)
    }

    /// Embedded reflection payload when present, otherwise one reflection
    /// query.
    fn reflection_data(&self) -> Result<ReflectionResponse> {
        if let Some(embedded) = self.data.get(ATTRIBUTE_KEY).filter(|v| !v.is_null()) {
            tracing::debug!(id = self.id(), "reusing embedded reflection data");
            return Ok(serde_json::from_value(embedded.clone())?);
        }
        let query = serde_json::to_value(ReflectionQuery::new(self.id()))?;
        let response = self.session.mql_read(query)?;
        Ok(serde_json::from_value(response)?)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_string())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("schema_loaded", &self.schema_loaded())
            .field("attributes_loaded", &self.attributes_loaded())
            .finish()
    }
}

/// Match reflection results against declared properties.
///
/// Forward links and literals match a property's own id; reverse links match
/// its master property. When both passes hit the same property id the
/// reverse-derived attribute wins — inherited last-write-wins precedence that
/// existing callers rely on (see DESIGN.md).
fn resolve_attributes(
    reflection: ReflectionResponse,
    properties: &Collection<Property>,
) -> Vec<Attribute> {
    let mut grouped = group_by_link(reflection.any_master, entity_row);
    merge_groups(&mut grouped, group_by_link(reflection.any_value, literal_row));

    let mut attributes: Vec<Attribute> = Vec::new();
    for (link, values) in &grouped {
        for property in properties.iter().filter(|p| p.id() == link) {
            upsert(
                &mut attributes,
                Attribute::create(values.clone(), property.clone()),
            );
        }
    }

    let reverse = group_by_link(reflection.any_reverse, entity_row);
    for (link, values) in &reverse {
        for property in properties
            .iter()
            .filter(|p| p.master_property() == Some(link.as_str()))
        {
            upsert(
                &mut attributes,
                Attribute::create(values.clone(), property.clone()),
            );
        }
    }

    attributes
}

fn entity_row(row: LinkedEntity) -> (String, ReflectedValue) {
    (
        row.link,
        ReflectedValue::Entity {
            id: row.id,
            name: row.name,
        },
    )
}

fn literal_row(row: LinkedLiteral) -> (String, ReflectedValue) {
    (row.link, ReflectedValue::Literal(row.value))
}

/// Group reflection rows by their link key, preserving first-seen key order.
fn group_by_link<R>(
    rows: Vec<R>,
    convert: fn(R) -> (String, ReflectedValue),
) -> Vec<(String, Vec<ReflectedValue>)> {
    let mut groups: Vec<(String, Vec<ReflectedValue>)> = Vec::new();
    for row in rows {
        let (link, value) = convert(row);
        match groups.iter_mut().find(|(key, _)| *key == link) {
            Some((_, values)) => values.push(value),
            None => groups.push((link, vec![value])),
        }
    }
    groups
}

/// Merge literal groups over entity groups: a group under an existing link
/// key replaces it in place, new keys append.
fn merge_groups(
    base: &mut Vec<(String, Vec<ReflectedValue>)>,
    extra: Vec<(String, Vec<ReflectedValue>)>,
) {
    for (link, values) in extra {
        match base.iter_mut().find(|(key, _)| *key == link) {
            Some((_, existing)) => *existing = values,
            None => base.push((link, values)),
        }
    }
}

/// Insert an attribute keyed by its property id, replacing any existing entry
/// in place so the map keeps insertion order.
fn upsert(attributes: &mut Vec<Attribute>, attribute: Attribute) {
    let id = attribute.property().id();
    match attributes
        .iter_mut()
        .find(|existing| existing.property().id() == id)
    {
        Some(existing) => *existing = attribute,
        None => attributes.push(attribute),
    }
}
