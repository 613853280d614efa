use anyhow::{Context, Result};
use std::path::Path;

use crate::embed;
use crate::grid::{compare, Grid, Tally};
use crate::renderer::{self, Raster};
use crate::utils::{file_utils, logger};

/// Compare `left` against the reference grid `right` and write the difference image.
///
/// Nothing is written unless both grids parse and share a shape.
pub fn run_compare(
    left: &Path,
    right: &Path,
    output: &Path,
    report: Option<&Path>,
) -> Result<Tally> {
    logger::info(&format!(
        "compare: left={} right={} output={}",
        left.display(),
        right.display(),
        output.display()
    ));

    let comparison = compare::compare_files(left, right).with_context(|| {
        format!(
            "failed to compare {} with {}",
            left.display(),
            right.display()
        )
    })?;
    let tally = comparison.tally();
    logger::debug(&format!("tally: {:?}", tally));

    let raster = Raster::paint(comparison.width(), comparison.height(), comparison.cells())?;
    renderer::save_png(raster, output)
        .with_context(|| format!("failed to write difference image {}", output.display()))?;

    if let Some(report_path) = report {
        let json = serde_json::to_string_pretty(&tally)?;
        file_utils::write_text(report_path, &json)?;
        logger::info(&format!("report written to {}", report_path.display()));
    }

    logger::info(&format!(
        "wrote {}x{} difference image, {} mismatched cells",
        tally.width, tally.height, tally.mismatched
    ));
    Ok(tally)
}

/// Render a single grid, sized by the grid itself.
pub fn run_render(input: &Path, output: &Path) -> Result<()> {
    logger::info(&format!(
        "render: input={} output={}",
        input.display(),
        output.display()
    ));

    let grid = Grid::load(input).with_context(|| format!("failed to load {}", input.display()))?;
    let raster = Raster::paint(grid.width(), grid.height(), grid.cells())?;
    renderer::save_png(raster, output)
        .with_context(|| format!("failed to write image {}", output.display()))?;

    logger::info(&format!("wrote {}x{} image", grid.width(), grid.height()));
    Ok(())
}

/// Write the bytes of `input` as a NUL-terminated `char` array source file.
pub fn run_embed(input: &Path, output: &Path, symbol: &str) -> Result<()> {
    logger::info(&format!(
        "embed: input={} output={} symbol={}",
        input.display(),
        output.display(),
        symbol
    ));

    let bytes = file_utils::read_file(input)?;
    let source = embed::byte_array_source(symbol, &bytes)?;
    file_utils::write_text(output, &source)?;

    logger::info(&format!("embedded {} bytes", bytes.len()));
    Ok(())
}
