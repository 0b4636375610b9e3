//! Test fixtures: a scripted query session standing in for the real store.

// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use mqlview::types::{Error, Result};
use mqlview::MqlSession;

/// A scripted query session: canned responses keyed by query shape, with
/// call counters the tests assert against.
#[derive(Default)]
pub struct RecordingSession {
    lookup: Option<Value>,
    schema: Option<Value>,
    reflection: Option<Value>,
    fail: bool,
    lookup_calls: AtomicUsize,
    schema_calls: AtomicUsize,
    reflection_calls: AtomicUsize,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that fails every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_lookup(mut self, response: Value) -> Self {
        self.lookup = Some(response);
        self
    }

    pub fn with_schema(mut self, response: Value) -> Self {
        self.schema = Some(response);
        self
    }

    pub fn with_reflection(mut self, response: Value) -> Self {
        self.reflection = Some(response);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }

    pub fn reflection_calls(&self) -> usize {
        self.reflection_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.lookup_calls() + self.schema_calls() + self.reflection_calls()
    }
}

impl MqlSession for RecordingSession {
    fn mql_read(&self, query: Value) -> Result<Value> {
        if self.fail {
            return Err(Error::session(std::io::Error::other("store unreachable")));
        }
        let (response, calls) = if query.get("/type/reflect/any_master").is_some() {
            (&self.reflection, &self.reflection_calls)
        } else if query.get("ken:type").is_some() {
            (&self.schema, &self.schema_calls)
        } else {
            (&self.lookup, &self.lookup_calls)
        };
        calls.fetch_add(1, Ordering::SeqCst);
        response.clone().ok_or_else(|| {
            Error::session(std::io::Error::other("no scripted response for query"))
        })
    }
}

/// Top-level record for the band resource used across loading tests.
pub fn band_record() -> Value {
    json!({"id": "/en/the_police", "name": "The Police"})
}

/// Schema response for the band resource: two types, three properties.
pub fn band_schema_response() -> Value {
    json!({
        "id": "/en/the_police",
        "name": "The Police",
        "ken:type": [
            {
                "id": "/music/artist",
                "name": "Musical Artist",
                "properties": [
                    {
                        "id": "/music/artist/origin",
                        "name": "Origin",
                        "expected_type": "/location/location",
                        "unique": true,
                        "master_property": null
                    },
                    {
                        "id": "/music/artist/album",
                        "name": "Albums",
                        "expected_type": "/music/album",
                        "unique": null,
                        "master_property": "/music/album/artist"
                    }
                ]
            },
            {
                "id": "/common/topic",
                "name": "Topic",
                "properties": [
                    {
                        "id": "/common/topic/alias",
                        "name": "Also known as",
                        "expected_type": "/type/text",
                        "unique": null,
                        "master_property": null
                    }
                ]
            }
        ]
    })
}

/// Reflection response matching [`band_schema_response`]: one forward link,
/// two reverse links and one literal.
pub fn band_reflection_response() -> Value {
    json!({
        "/type/reflect/any_master": [
            {"id": "/en/santa_monica", "link": "/music/artist/origin", "name": "Santa Monica"}
        ],
        "/type/reflect/any_reverse": [
            {"id": "/en/outlandos_d_amour", "link": "/music/album/artist", "name": "Outlandos d'Amour"},
            {"id": "/en/reggatta_de_blanc", "link": "/music/album/artist", "name": "Reggatta de Blanc"}
        ],
        "/type/reflect/any_value": [
            {"link": "/common/topic/alias", "value": "Police"}
        ],
        "id": "/en/the_police"
    })
}
