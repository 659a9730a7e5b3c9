// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::{AppOptions, ExportFormat, PageKind};
use crate::data::{RawData, SearchView};
use crate::log::{self, LogTarget};
use crate::store::SheetCache;
use crate::summary::{Metric, Summary};
use crate::table::{self, TableData};
use crate::{file, load, summary};

#[derive(Parser, Debug)]
#[command(name = "cftv_dash")]
#[command(about = "Site status summary for CFTV camera / alarm sheets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Spreadsheet path or URL (overrides [source].location)
    #[arg(long, short)]
    pub source: Option<String>,

    /// Config file (default: dashboard.toml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Worksheet name (overrides [source].sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Tab to print / export
    #[arg(long, short, value_enum, default_value_t = Tab::Cameras)]
    pub tab: Tab,

    /// Keep only sites whose name contains this text
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Write the tab to this file (extension picks the format when present)
    #[arg(long, short = 'o')]
    pub export: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Header row in the export file (`--headers`, `--headers false`)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub headers: Option<bool>,

    /// Print only the summary block
    #[arg(long)]
    pub summary_only: bool,

    /// Debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Tab {
    Cameras,
    Alarms,
    Overview,
}

impl From<Tab> for PageKind {
    fn from(t: Tab) -> Self {
        match t {
            Tab::Cameras => PageKind::Cameras,
            Tab::Alarms => PageKind::Alarms,
            Tab::Overview => PageKind::Overview,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(LogTarget::Stderr, args.verbose);

    let mut opts = AppOptions::load_or_default(args.config.as_deref())
        .wrap_err("loading config")?;
    apply_args(&mut opts, &args);

    let mut cache = SheetCache::new();
    let raw = load::load_dashboard(&opts, &mut cache, None)
        .wrap_err_with(|| format!("loading {}", opts.source.location))?;

    let kind = PageKind::from(args.tab);
    let query = args.search.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let view = SearchView::from_raw(&raw, query);

    print_summary(&raw, kind, query);
    if !args.summary_only {
        println!();
        print_table(&table::build(kind, view.records()));
    }

    if args.export.is_some() {
        let path = opts.export.out_path();
        file::write_export_to(&path, &opts.export, kind, view.records())
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("Exported {} row(s) → {}", view.len(), path.display());
    }

    if let Some(w) = raw.sheet().layout_warning() {
        eprintln!("Warning: {w}");
    }
    if raw.records().is_empty() {
        logw!("No site rows found in {}", raw.source());
    }
    Ok(())
}

/// Command-line overrides on top of the config file.
pub fn apply_args(opts: &mut AppOptions, args: &Args) {
    if let Some(s) = &args.source { opts.source.location = s.clone(); }
    if let Some(s) = &args.sheet { opts.source.sheet = Some(s.clone()); }
    if let Some(h) = args.headers { opts.export.include_headers = h; }
    if let Some(p) = &args.export {
        opts.export.set_path(p);
        // "sites.tsv" without --format means TSV
        if args.format.is_none() && p.trim().to_ascii_lowercase().ends_with(".tsv") {
            opts.export.format = ExportFormat::Tsv;
        }
    }
    if let Some(f) = args.format { opts.export.format = f.into(); }
}

fn metrics_for(kind: PageKind) -> &'static [Metric] {
    match kind {
        PageKind::Cameras => &[Metric::Cameras],
        PageKind::Alarms => &[Metric::Alarms],
        PageKind::Overview => &[Metric::Cameras, Metric::Alarms],
    }
}

fn print_summary(raw: &RawData, kind: PageKind, query: Option<&str>) {
    println!("Atualizado em {}", raw.updated_label());
    for &m in metrics_for(kind) {
        let s: Summary = raw.summarize(m, query);
        println!(
            "{:<8} sites {:>4} | total {:>5} | online {:>5} ({:.1}%) | offline {:>5} | atenção {:>4}",
            m.title(),
            s.sites,
            s.total,
            s.online,
            s.online_percent(),
            s.offline,
            s.needs_attention
        );
        if kind == PageKind::Overview {
            let parts: Vec<String> = summary::status_breakdown(raw.records(), m, query)
                .into_iter()
                .filter(|(_, n)| *n > 0)
                .map(|(g, n)| format!("{g}: {n}"))
                .collect();
            if !parts.is_empty() {
                println!("         {}", parts.join(", "));
            }
        }
    }
}

/// Space-aligned columns; widths from the widest cell (char count).
fn print_table(data: &TableData) {
    let mut widths: Vec<usize> = data.headers.iter().map(|h| h.chars().count()).collect();
    for r in &data.rows {
        for (i, c) in r.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(c.chars().count());
            }
        }
    }

    let line = |cells: &[String]| {
        let mut out = s!();
        for (i, c) in cells.iter().enumerate() {
            let w = widths.get(i).copied().unwrap_or(0);
            let pad = w.saturating_sub(c.chars().count());
            out.push_str(c);
            if i + 1 < cells.len() {
                out.push_str(&" ".repeat(pad + 2));
            }
        }
        out
    };

    println!("{}", line(&data.headers));
    println!("{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for r in &data.rows {
        println!("{}", line(r));
    }
}
