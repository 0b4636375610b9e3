//! The query-execution collaborator seam.

use serde_json::Value;

use crate::types::Result;

/// Executes MQL read queries against the knowledge base.
///
/// Implementations own transport, authentication, timeouts and retries. The
/// view-model issues one blocking call per lazy load and propagates failures
/// unchanged to the caller of the triggering accessor.
pub trait MqlSession: Send + Sync {
    /// Execute one nested-dictionary read query and return the nested result.
    fn mql_read(&self, query: Value) -> Result<Value>;
}
