use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use termcal_calendar::{classify, months_between};
use termcal_export::{ExportConfig, export, output_stem};
use termcal_render::{ColorTable, Figure, MarkerSet, RenderConfig, lay_out, place_overlays};

use crate::cli::Cli;
use crate::config::academic_year_policy;

/// Run the full pipeline: policy, classification, layout, overlays, export.
pub fn run(cli: &Cli) -> Result<()> {
    let _span = info_span!("generate").entered();

    // Step 1: Load the built-in policy
    let policy = academic_year_policy().context("invalid built-in calendar policy")?;
    info!(
        start = %policy.academic_start(),
        last_day = %policy.last_day(),
        "calendar policy loaded"
    );

    // Step 2: Classify every date in the window
    let days = classify(&policy);
    info!(n_days = days.len(), "days classified");

    // Step 3: Measure the page
    let months = months_between(policy.academic_start(), policy.last_day());
    let render_cfg = RenderConfig::default();
    let layout = lay_out(&days, &months, &ColorTable::default(), &render_cfg)
        .context("failed to lay out calendar")?;
    info!(
        n_months = months.len(),
        width = layout.page().width,
        height = layout.page().height,
        "layout measured"
    );

    // Step 4: Place markers on the measured cells
    let overlays = place_overlays(&layout, &MarkerSet::from_policy(&policy), &render_cfg);
    let figure = Figure::compose(&layout, &overlays);

    // Step 5: Export
    let stem = output_stem(policy.academic_start().year(), policy.last_day().year());
    let files = export(&figure, &cli.out_dir, &stem, &ExportConfig::default())
        .with_context(|| format!("failed to export calendar to {}", cli.out_dir.display()))?;
    info!(png = %files.png.display(), pdf = %files.pdf.display(), "export complete");

    println!("Saved {stem}.png and {stem}.pdf");
    Ok(())
}
