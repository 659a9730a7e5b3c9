// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::PageKind,
        state::AppState,
    },
    data::{RawData, SearchView},
    store::SheetCache,
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let title = state.options.gui.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // raw grids by source; reload drops the entry
    pub cache: SheetCache,

    // normalized data for the current source; None after a failed load
    pub raw: Option<RawData>,
    pub error: Option<String>,

    // rows of `raw` matching the search box, rebuilt on every change
    pub row_ix: Vec<usize>,

    // text fields (we map these <-> options)
    pub source_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
    pub logo: Option<egui::TextureHandle>,
}

impl App {
    pub fn new(ctx: &egui::Context, mut state: AppState) -> Self {
        state.gui.current_page_index = router::index_of(state.options.gui.start_tab);

        let logo = state
            .options
            .gui
            .logo
            .as_deref()
            .and_then(|p| super::logo::texture(ctx, p));

        let source_text = state.options.source.location.clone();
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            cache: SheetCache::new(),
            raw: None,
            error: None,
            row_ix: Vec::new(),
            source_text,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
            logo,
        };

        logf!("Init: source={}, page={:?}", app.source_text, app.current_page_kind());
        super::actions::load(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Recompute the search view from `raw` and the search box.
    pub fn rebuild_view(&mut self) {
        self.row_ix = match &self.raw {
            Some(raw) => SearchView::from_raw(raw, self.state.gui.query()).row_ix,
            None => Vec::new(),
        };
    }

    /// Current view over `raw`, if data is loaded.
    pub fn view(&self) -> Option<SearchView<'_>> {
        self.raw.as_ref().map(|raw| SearchView::from_indices(raw, self.row_ix.clone()))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::source_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw(ui, self);

            ui.separator();

            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::from_rgb(0xDC, 0x3C, 0x3C), format!("Erro ao carregar a planilha: {err}"));
                return;
            }
            if self.raw.as_ref().is_none_or(|r| r.records().is_empty()) {
                ui.label("Nenhum dado foi encontrado na planilha.");
                return;
            }

            components::search_bar::draw(ui, self);
            components::summary_cards::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
