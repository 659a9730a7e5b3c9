// src/store.rs
//
// In-memory sheet cache, keyed by source. Holds raw grids only; records are
// re-derived on every render so a config change never sees stale values.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::SourceError;
use crate::sheet::RawSheet;
use crate::source::SheetSource;

#[derive(Debug, Default)]
pub struct SheetCache {
    sheets: HashMap<String, RawSheet>,
}

impl SheetCache {
    pub fn new() -> Self { Self::default() }

    /// Cached sheet for `source`, or run `load` and keep its result.
    /// A failed load caches nothing.
    pub fn get_or_load<F>(&mut self, source: &SheetSource, load: F) -> Result<&RawSheet, SourceError>
    where
        F: FnOnce(&SheetSource) -> Result<RawSheet, SourceError>,
    {
        match self.sheets.entry(source.key()) {
            Entry::Occupied(e) => {
                logd!("Cache: hit for {}", source);
                let s: &RawSheet = e.into_mut();
                Ok(s)
            }
            Entry::Vacant(e) => {
                logd!("Cache: miss for {}", source);
                let sheet = load(source)?;
                let s: &RawSheet = e.insert(sheet);
                Ok(s)
            }
        }
    }

    /// Drop one entry; the next `get_or_load` reads the source again.
    pub fn invalidate(&mut self, source: &SheetSource) -> bool {
        self.sheets.remove(&source.key()).is_some()
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
    }

    pub fn contains(&self, source: &SheetSource) -> bool {
        self.sheets.contains_key(&source.key())
    }

    pub fn len(&self) -> usize { self.sheets.len() }
    pub fn is_empty(&self) -> bool { self.sheets.is_empty() }
}
