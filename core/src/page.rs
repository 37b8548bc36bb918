//! Page model: one image slot and the transient references assigned to it.
//!
//! # Design
//! `ObjectUrlStore` mints `blob:` references that resolve back to the payload
//! they were created from, until revoked. `Page::bind_image` moves the page
//! from `Idle` to `Bound` exactly once. Binding does not revoke the reference
//! it assigns; outstanding references are released only by `Page::unload`.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::error::PageError;
use crate::types::BinaryPayload;

pub const DEFAULT_ORIGIN: &str = "null";

/// A revocable `blob:` reference to a payload held in an `ObjectUrlStore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct ObjectUrlStore {
    origin: String,
    entries: HashMap<ObjectUrl, BinaryPayload>,
}

impl Default for ObjectUrlStore {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

impl ObjectUrlStore {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            entries: HashMap::new(),
        }
    }

    pub fn create(&mut self, payload: BinaryPayload) -> ObjectUrl {
        let url = ObjectUrl(format!("blob:{}/{}", self.origin, Uuid::new_v4()));
        self.entries.insert(url.clone(), payload);
        url
    }

    pub fn resolve(&self, url: &ObjectUrl) -> Option<&BinaryPayload> {
        self.entries.get(url)
    }

    /// Look up a reference by its string form, as an element's `src` holds it.
    pub fn resolve_str(&self, url: &str) -> Option<&BinaryPayload> {
        self.entries.get(&ObjectUrl(url.to_string()))
    }

    /// Returns false if the reference was unknown or already revoked.
    pub fn revoke(&mut self, url: &ObjectUrl) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    fn revoke_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}

/// An image slot. `src` is whatever reference was last assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    pub src: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Idle,
    Bound,
}

#[derive(Debug)]
pub struct Page {
    elements: HashMap<String, ImageElement>,
    urls: ObjectUrlStore,
    state: BindingState,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            urls: ObjectUrlStore::default(),
            state: BindingState::Idle,
        }
    }

    /// Add an image element addressable as `#id`.
    pub fn with_image(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), ImageElement::default());
        self
    }

    /// Only `#id` selectors are supported.
    pub fn query_selector(&self, selector: &str) -> Option<&ImageElement> {
        selector.strip_prefix('#').and_then(|id| self.elements.get(id))
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Option<&mut ImageElement> {
        selector
            .strip_prefix('#')
            .and_then(|id| self.elements.get_mut(id))
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn object_urls(&self) -> &ObjectUrlStore {
        &self.urls
    }

    /// Mint a reference for `payload` and assign it to the element matching
    /// `selector`. Nothing is minted if the element is missing.
    pub fn bind_image(
        &mut self,
        selector: &str,
        payload: BinaryPayload,
    ) -> Result<ObjectUrl, PageError> {
        if self.state == BindingState::Bound {
            return Err(PageError::AlreadyBound);
        }
        let id = selector
            .strip_prefix('#')
            .filter(|id| self.elements.contains_key(*id))
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))?
            .to_string();

        let url = self.urls.create(payload);
        if let Some(element) = self.elements.get_mut(&id) {
            element.src = Some(url.as_str().to_string());
        }
        self.state = BindingState::Bound;
        tracing::debug!(%selector, url = %url, "image bound");
        Ok(url)
    }

    /// Navigation teardown: revoke every outstanding reference.
    pub fn unload(&mut self) -> usize {
        let revoked = self.urls.revoke_all();
        tracing::debug!(revoked, "page unloaded");
        revoked
    }
}
