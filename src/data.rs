// src/data.rs
//
// Light wrappers around canonical and view-layer dashboard data.
//
// - RawData: the normalized sheet as last loaded. Replaced whole on reload,
//            never edited in place.
// - SearchView: row indices into RawData that match the current search,
//               produced fresh for each render.

use chrono::{DateTime, Local};

use crate::normalize::{NormalizedSheet, SiteRecord};
use crate::source::SheetSource;
use crate::summary::{self, Metric, Summary};

const LOADED_AT_FMT: &str = "%d/%m/%Y %H:%M";

/// Authoritative dashboard data for one load.
#[derive(Clone, Debug)]
pub struct RawData {
    source: SheetSource,
    sheet: NormalizedSheet,
    loaded_at: DateTime<Local>,
}

impl RawData {
    pub fn new(source: SheetSource, sheet: NormalizedSheet, loaded_at: DateTime<Local>) -> Self {
        Self { source, sheet, loaded_at }
    }

    pub fn source(&self) -> &SheetSource { &self.source }
    pub fn sheet(&self) -> &NormalizedSheet { &self.sheet }
    pub fn records(&self) -> &[SiteRecord] { &self.sheet.records }

    /// "Atualizado em" text: the sheet's own line when it has one, else load time.
    pub fn updated_label(&self) -> String {
        match &self.sheet.updated_at {
            Some(s) => s.clone(),
            None => self.loaded_at.format(LOADED_AT_FMT).to_string(),
        }
    }

    pub fn summarize(&self, metric: Metric, query: Option<&str>) -> Summary {
        summary::summarize(self.records(), metric, query)
    }
}

/// Zero-copy filtered view for display.
/// Holds list of row indexes into RawData.
#[derive(Clone, Debug)]
pub struct SearchView<'a> {
    /// Positions of kept records in the raw data
    pub row_ix: Vec<usize>,
    raw: &'a RawData,
}

impl<'a> SearchView<'a> {
    /// Records whose name contains `query` (case-insensitive). Blank query keeps all.
    pub fn from_raw(raw: &'a RawData, query: Option<&str>) -> Self {
        Self { row_ix: summary::filter_indices(raw.records(), query), raw }
    }

    /// Build a view directly from precomputed indices.
    pub fn from_indices(raw: &'a RawData, row_ix: Vec<usize>) -> Self {
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn record(&self, i: usize) -> Option<&'a SiteRecord> {
        self.row_ix.get(i).and_then(|&ix| self.raw.records().get(ix))
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SiteRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.records().get(ix))
    }
}
