//! Entry points for building resources against an injected session.

use std::sync::Arc;

use serde_json::Value;

use crate::resource::Resource;
use crate::session::MqlSession;
use crate::types::{LookupQuery, Result};

/// Builds resources over one injected query session.
///
/// The session is shared by every resource the client creates; the client
/// itself keeps no per-resource state. There is no ambient/global session —
/// callers decide which store they talk to.
#[derive(Clone)]
pub struct Client {
    session: Arc<dyn MqlSession>,
}

impl Client {
    /// Create a client over an injected query session.
    pub fn new(session: Arc<dyn MqlSession>) -> Self {
        Self { session }
    }

    /// Wrap an already-fetched record without issuing a query.
    pub fn resource(&self, data: Value) -> Result<Resource> {
        Resource::new(data, Arc::clone(&self.session))
    }

    /// Look up a resource by id and wrap the result.
    pub fn get(&self, id: &str) -> Result<Resource> {
        let query = serde_json::to_value(LookupQuery::new(id))?;
        let record = self.session.mql_read(query)?;
        tracing::debug!(id, "resource fetched");
        Resource::new(record, Arc::clone(&self.session))
    }
}
