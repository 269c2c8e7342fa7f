//! Shared test helpers for client tests.

#![allow(dead_code)]

use oparl_client::{Client, DiagnosticCollector, FetchError, FetchResult, Fetcher, TypeRegistry};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const NS: &str = "https://schema.oparl.org/1.0";

/// Canonical type tag for a kind name.
pub fn type_uri(name: &str) -> String {
    format!("{NS}/{name}")
}

/// Serves JSON documents from memory and records every request.
#[derive(Default)]
pub struct FixtureFetcher {
    documents: RefCell<HashMap<String, Value>>,
    calls: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn insert(&self, url: &str, document: Value) {
        self.documents.borrow_mut().insert(url.to_string(), document);
    }

    /// Every URL requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn total(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn count(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == url).count()
    }
}

impl Fetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> FetchResult<Value> {
        self.calls.borrow_mut().push(url.to_string());
        self.documents
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Transport {
                url: url.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}

/// Client over the OParl 1.0 registry, the given fetcher and a collector.
pub fn client_with(fetcher: &Rc<FixtureFetcher>) -> (Client, DiagnosticCollector) {
    client_with_registry(fetcher, TypeRegistry::oparl_1_0())
}

pub fn client_with_registry(
    fetcher: &Rc<FixtureFetcher>,
    registry: TypeRegistry,
) -> (Client, DiagnosticCollector) {
    let diagnostics = DiagnosticCollector::new();
    let client = Client::builder()
        .registry(registry)
        .fetcher(Rc::clone(fetcher))
        .sink(diagnostics.clone())
        .build()
        .unwrap();
    (client, diagnostics)
}

/// Minimal resource body of the given kind.
pub fn object(id: &str, kind: &str) -> Value {
    json!({ "id": id, "type": type_uri(kind) })
}

/// Registers a paginated list of `Paper`s at `base` with the given page
/// sizes. Page `i` lives at `{base}?page={i}`, page 0 also at `base`.
/// Returns the URLs of all items in order.
pub fn paginate(fetcher: &FixtureFetcher, base: &str, sizes: &[usize]) -> Vec<String> {
    let mut ids = Vec::new();
    for (page, size) in sizes.iter().enumerate() {
        let data: Vec<Value> = (0..*size)
            .map(|i| {
                let id = format!("{base}/paper-{page}-{i}");
                ids.push(id.clone());
                object(&id, "Paper")
            })
            .collect();
        let links = if page + 1 < sizes.len() {
            json!({ "next": format!("{base}?page={}", page + 1) })
        } else {
            json!({ "next": null })
        };
        let document = json!({ "data": data, "links": links });
        if page == 0 {
            fetcher.insert(base, document);
        } else {
            fetcher.insert(&format!("{base}?page={page}"), document);
        }
    }
    ids
}
