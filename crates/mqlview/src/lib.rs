//! mqlview — a typed, read-only view-model over an MQL-queried knowledge graph.
//!
//! A [`Resource`] wraps one already-fetched top-level record and lazily loads,
//! at most once each, two facets: its declared type schema and its concrete
//! attribute values. The schema arrives from a single nested schema query;
//! attributes are resolved by reflecting over every link touching the resource
//! and matching the results against the declared properties.
//!
//! All queries go through an injected [`MqlSession`] collaborator — transport,
//! authentication and retries live behind that seam, never inside the
//! view-model.

pub mod client;
pub mod collection;
pub mod resource;
pub mod schema;
pub mod session;
pub mod types;

pub use client::Client;
pub use collection::{Collection, Identified};
pub use resource::{Attribute, AttributeValue, ReflectedValue, Resource, View};
pub use schema::{Property, Type};
pub use session::MqlSession;
pub use types::{Error, Result};
