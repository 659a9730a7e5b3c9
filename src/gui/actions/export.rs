// src/gui/actions/export.rs
use crate::{gui::app::App, file, normalize::SiteRecord};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let kind = app.current_page_kind();
    let export = &app.state.options.export;

    let result = app.raw.as_ref().and_then(|raw| {
        let records: Vec<&SiteRecord> = if export.filtered_only {
            app.row_ix.iter().filter_map(|&ix| raw.records().get(ix)).collect()
        } else {
            raw.records().iter().collect()
        };
        logf!("Export: Begin page={:?}, rows={}, filtered={}", kind, records.len(), export.filtered_only);
        (!records.is_empty()).then(|| file::write_export(export, kind, records))
    });

    let status_msg = match result {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(Ok(path)) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {}", path.display())
        }
        Some(Err(e)) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // mutate app only after the data borrows are gone
    app.status(status_msg);
}
