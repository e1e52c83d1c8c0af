use crate::error::ParseError;
use crate::grammar;
use crate::types::TypeDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Memoizes [`grammar::parse`], keyed by the literal type string.
///
/// Entries are inserted once and never evicted or replaced. Failed parses are not cached.
#[derive(Default)]
pub struct TypeCache {
    entries: RwLock<HashMap<String, Arc<TypeDescriptor>>>,
}

static GLOBAL: Lazy<TypeCache> = Lazy::new(TypeCache::default);

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance behind [`parse_cached`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn get_or_parse(&self, type_str: &str) -> Result<Arc<TypeDescriptor>, ParseError> {
        if let Some(ty) = self.entries.read().get(type_str) {
            trace!(type_str, "Type cache hit");
            return Ok(Arc::clone(ty));
        }

        // Parse outside the lock. A racing thread may parse the same string; the first insert wins.
        let parsed = Arc::new(grammar::parse(type_str)?);

        let mut entries = self.entries.write();
        let ty = entries.entry(type_str.to_owned()).or_insert_with(|| {
            debug!(type_str, ty = %parsed, "Caching parsed type");
            parsed
        });
        Ok(Arc::clone(ty))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses `type_str` through the process-wide [`TypeCache`].
pub fn parse_cached(type_str: &str) -> Result<Arc<TypeDescriptor>, ParseError> {
    TypeCache::global().get_or_parse(type_str)
}
