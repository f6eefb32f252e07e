// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::{
        consts::{BASE_URL, PAGE_PATH},
        options::RunOptions,
    },
    core::net::Client,
    file, gate,
    progress::Progress,
    records, sheet,
    specs::locale_detail,
};

/// Summary of what one run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
    /// True when the change gate decided nothing was new.
    pub skipped: bool,
}

/* ---------------- Pipeline ---------------- */

/// Fetch -> gate -> download -> normalize -> write -> remember.
/// Strictly sequential; the first failing step aborts the run.
pub fn run(
    opts: &RunOptions,
    client: &Client,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let page_url = join!(BASE_URL, PAGE_PATH);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(5);
        p.log("Fetching USPS ZIP Locale Detail page");
    }
    let doc = client.get_text(&page_url)?;
    let page = locale_detail::extract(&doc);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("page");
    }

    let page_date = page
        .last_updated_text
        .as_deref()
        .and_then(gate::parse_page_date);
    match (&page.last_updated_text, page_date) {
        (Some(text), Some(_)) => logf!("page last updated: {text}"),
        (Some(text), None) => {
            logw!("could not parse page date from: {text}");
            if let Some(p) = progress.as_deref_mut() {
                p.log("Could not parse page date; proceeding with update anyway");
            }
        }
        (None, _) => {
            logw!("no last-updated text on page");
            if let Some(p) = progress.as_deref_mut() {
                p.log("No last-updated text found; proceeding with update anyway");
            }
        }
    }

    let marker_path = opts.marker_path();
    if !opts.force {
        let stored = gate::load_marker(&marker_path);
        if gate::should_skip(page.last_updated_text.as_deref(), stored.as_deref()) {
            logf!("page date unchanged; skipping");
            if let Some(p) = progress.as_deref_mut() {
                p.log("No new data, page date matches stored date. Skipping.");
                p.finish();
            }
            return Ok(RunSummary {
                files_written: Vec::new(),
                records: 0,
                skipped: true,
            });
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("gate");
    }

    let href = page.xls_href.ok_or("ZIP_Locale_Detail.xls link not found")?;
    let xls_url = locale_detail::resolve_link(&href);
    logf!("xls link: {xls_url}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found XLS link: {xls_url}"));
        p.log("Downloading XLS");
    }
    let bytes = client.get_bytes(&xls_url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("download");
    }

    let table = sheet::parse_first_sheet(&bytes)?;
    let recs = records::normalize(&table);
    logf!("parsed {} rows", recs.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Parsed {} rows", recs.len()));
        p.step_done("normalize");
    }

    let mut files_written = Vec::new();
    files_written.push(file::write_records_single(&opts.all_records_path(), &recs)?);
    if !opts.single_file {
        files_written.extend(file::write_records_per_state(&opts.states_dir(), &recs)?);
    }

    // Marker goes last, after every write landed; unparseable page dates
    // are never persisted.
    if page_date.is_some() {
        if let Some(text) = &page.last_updated_text {
            gate::save_marker(&marker_path, text)?;
            logf!("saved last-updated marker: {text}");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {} file(s)", files_written.len()));
        p.step_done("write");
        p.finish();
    }

    Ok(RunSummary {
        records: recs.len(),
        files_written,
        skipped: false,
    })
}
