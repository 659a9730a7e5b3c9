// src/gui/actions/reload.rs
use crate::{gui::{app::App, progress::GuiProgress}, load, progress::Progress};

/// Load through the cache (startup, source change).
pub fn load(app: &mut App) {
    run(app, false);
}

/// Drop the cached grid and read the source again.
pub fn reload(app: &mut App) {
    run(app, true);
}

fn run(app: &mut App, fresh: bool) {
    let src = app.source_text.trim().to_string();
    if src != app.state.options.source.location {
        logf!("UI: Source → {}", src);
        app.state.options.source.location = src;
    }

    let res = {
        let mut progress = GuiProgress::new(&mut app.status);
        let opts = &app.state.options;
        if fresh {
            load::reload_dashboard(opts, &mut app.cache, Some(&mut progress as &mut dyn Progress))
        } else {
            load::load_dashboard(opts, &mut app.cache, Some(&mut progress as &mut dyn Progress))
        }
    };

    match res {
        Ok(raw) => {
            if let Some(w) = raw.sheet().layout_warning() {
                logw!("UI: {}", w);
                app.status(format!("Warning: {w}"));
            }
            app.error = None;
            app.raw = Some(raw);
        }
        Err(e) => {
            // no partial render: stale rows from an older load are dropped too
            loge!("Load: Error: {}", e);
            app.status(format!("Load error: {e}"));
            app.error = Some(e.to_string());
            app.raw = None;
        }
    }
    app.rebuild_view();
}
