use oparl_model::{Diagnostic, DiagnosticKind, Kind, Schema};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

use crate::client::Client;
use crate::convert::convert;
use crate::error::{ClientError, ClientResult};
use crate::value::Value;

/// A single addressable OParl resource.
///
/// An entity is either loaded (its fields were converted from JSON data) or
/// unloaded (only `id` and `type` are known). Reading a field that is not
/// present on an unloaded entity downloads its data first.
///
/// `Entity` is a shared handle: clones refer to the same instance and see
/// the same load state. Two entities reached through different references to
/// the same identifier are distinct instances; compare
/// [`identifier`](Self::identifier)s to detect that. The handle is not
/// `Send`; an entity must stay on the thread of its [`Client`].
#[derive(Clone)]
pub struct Entity {
    inner: Rc<EntityInner>,
}

struct EntityInner {
    client: Client,
    identifier: String,
    type_tag: String,
    kind: Kind,
    state: RefCell<EntityState>,
}

struct EntityState {
    loaded: bool,
    fields: BTreeMap<String, Value>,
}

impl Entity {
    pub(crate) fn unloaded(client: Client, identifier: &str, type_tag: &str, kind: Kind) -> Self {
        let fields = BTreeMap::from([
            ("id".to_string(), Value::Json(identifier.into())),
            ("type".to_string(), Value::Json(type_tag.into())),
        ]);
        Self {
            inner: Rc::new(EntityInner {
                client,
                identifier: identifier.to_string(),
                type_tag: type_tag.to_string(),
                kind,
                state: RefCell::new(EntityState {
                    loaded: false,
                    fields,
                }),
            }),
        }
    }

    /// The identifier (URL) this entity was created with.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.inner.type_tag
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.state.borrow().loaded
    }

    /// Returns true if both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Entity) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the value of `field`, loading the entity first if the field
    /// is absent and the entity is not loaded yet.
    pub fn get(&self, field: &str) -> ClientResult<Value> {
        self.try_get(field)?
            .ok_or_else(|| ClientError::FieldNotFound {
                id: self.inner.identifier.clone(),
                field: field.to_string(),
            })
    }

    /// Like [`get`](Self::get), but a field that is still absent after
    /// loading yields `None`.
    pub fn try_get(&self, field: &str) -> ClientResult<Option<Value>> {
        if let Some(value) = self.cached(field) {
            return Ok(Some(value));
        }
        if self.is_loaded() {
            return Ok(None);
        }
        self.load()?;
        Ok(self.cached(field))
    }

    /// Names of all fields. Loads the entity if necessary.
    pub fn keys(&self) -> ClientResult<Vec<String>> {
        self.load()?;
        Ok(self.inner.state.borrow().fields.keys().cloned().collect())
    }

    /// Number of fields. Loads the entity if necessary.
    pub fn len(&self) -> ClientResult<usize> {
        self.load()?;
        Ok(self.inner.state.borrow().fields.len())
    }

    pub fn is_empty(&self) -> ClientResult<bool> {
        Ok(self.len()? == 0)
    }

    /// `shortName` or `name`, if already known. Never loads.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        let state = self.inner.state.borrow();
        ["shortName", "name"]
            .iter()
            .find_map(|key| state.fields.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }

    /// Loads the entity's data unless it is already loaded.
    pub fn load(&self) -> ClientResult<()> {
        self.load_with(false)
    }

    /// Downloads the entity's data even if it is already loaded.
    pub fn reload(&self) -> ClientResult<()> {
        self.load_with(true)
    }

    pub fn load_with(&self, force: bool) -> ClientResult<()> {
        if self.is_loaded() && !force {
            return Ok(());
        }
        debug!(id = %self.inner.identifier, kind = %self.inner.kind, "Loading object");
        let data = self.inner.client.fetch(&self.inner.identifier)?;
        self.init_from_json(&data)
    }

    /// Replaces the entity's fields with the conversion of `data`.
    ///
    /// Fails if `data` lacks `id` or `type` or if its type resolves to a
    /// different kind; in that case the entity is left unchanged. An `id`
    /// different from this entity's identifier is reported but accepted.
    pub fn init_from_json(&self, data: &serde_json::Value) -> ClientResult<()> {
        let client = &self.inner.client;
        let id = data
            .get("id")
            .and_then(serde_json::Value::as_str)
            .ok_or(ClientError::MissingId)?;
        if id != self.inner.identifier {
            client.report(Diagnostic::new(
                DiagnosticKind::IdMismatch,
                self.inner.identifier.as_str(),
                format!(
                    "Initializing object \"{}\" from JSON data which contains a different ID ({id}).",
                    self.inner.identifier
                ),
            ));
        }
        let type_tag = data
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ClientError::MissingType)?;
        let resolution = client.resolve(type_tag)?;
        if resolution.kind != self.inner.kind {
            return Err(ClientError::TypeMismatch {
                expected: self.inner.kind,
                found: resolution.kind,
            });
        }
        self.populate(data, resolution.schema)
    }

    /// Converts every field of `data` and, if all conversions succeed,
    /// installs the result and marks the entity loaded.
    pub(crate) fn populate(&self, data: &serde_json::Value, schema: &Schema) -> ClientResult<()> {
        let client = &self.inner.client;
        let mut fields = BTreeMap::new();
        if let Some(object) = data.as_object() {
            for (key, raw) in object {
                let conversion = convert(client, schema, key, raw, &self.inner.identifier)?;
                for diagnostic in conversion.diagnostics {
                    client.report(diagnostic);
                }
                fields.insert(key.clone(), conversion.value);
            }
        }

        let mut state = self.inner.state.borrow_mut();
        state.fields = fields;
        state.loaded = true;
        Ok(())
    }

    fn cached(&self, field: &str) -> Option<Value> {
        self.inner.state.borrow().fields.get(field).cloned()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<oparl:{}", self.inner.kind)?;
        if !self.is_loaded() {
            f.write_str("?")?;
        }
        write!(f, " {}", self.inner.identifier)?;
        if let Some(name) = self.name() {
            write!(f, " ({name})")?;
        }
        f.write_str(">")
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("identifier", &self.inner.identifier)
            .field("kind", &self.inner.kind)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
