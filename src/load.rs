// src/load.rs
//
// One load = resolve source → cached raw grid → normalize. Shared by GUI and CLI.

use chrono::Local;

use crate::config::options::AppOptions;
use crate::data::RawData;
use crate::error::SourceError;
use crate::normalize;
use crate::progress::Progress;
use crate::source::{self, SheetSource};
use crate::store::SheetCache;

/// Load (or re-use) the configured sheet and normalize it.
pub fn load_dashboard(
    opts: &AppOptions,
    cache: &mut SheetCache,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RawData, SourceError> {
    let src = SheetSource::parse(&opts.source.location)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        if src.is_remote() {
            p.log(&format!("Downloading {src}"));
        } else {
            p.log(&format!("Loading {src}"));
        }
    }

    let res = cache.get_or_load(&src, |s| source::load_sheet(s, &opts.source));
    let sheet = match res {
        Ok(sheet) => sheet,
        Err(e) => {
            loge!("Load: {}", e);
            if let Some(p) = progress.as_deref_mut() { p.finish(); }
            return Err(e);
        }
    };
    if let Some(p) = progress.as_deref_mut() { p.step_done("sheet"); }

    let normalized = normalize::normalize(sheet, &opts.sheet);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("records");
        p.log(&format!("{} site(s) loaded", normalized.records.len()));
        p.finish();
    }

    logf!("Load: {} site(s) from {}", normalized.records.len(), src);
    Ok(RawData::new(src, normalized, Local::now()))
}

/// Drop the cached grid first, so the source is read again.
pub fn reload_dashboard(
    opts: &AppOptions,
    cache: &mut SheetCache,
    progress: Option<&mut dyn Progress>,
) -> Result<RawData, SourceError> {
    if let Ok(src) = SheetSource::parse(&opts.source.location) {
        if cache.invalidate(&src) {
            logd!("Load: invalidated {}", src);
        }
    }
    load_dashboard(opts, cache, progress)
}
