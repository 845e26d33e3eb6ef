//! Static-site export.
//!
//! Writes a self-contained copy of the guide under one directory:
//!
//! ```text
//! index.html
//! assets/hero.svg
//! models/correlated.svg
//! models/bifactor.svg
//! models/second-order.svg
//! ```
//!
//! Variant diagrams are rendered in parallel; files are written afterwards in
//! a fixed order.

pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::error::{GuideError, Result};
use crate::geometry::diagram::DiagramLayout;
use crate::geometry::scene::SceneLayout;
use crate::model::ModelVariant;
use crate::render::scene_graph::SceneGraph;
use crate::render::svg::{render_diagram_svg, render_scene_svg};

pub use html::{model_asset, render_index, HERO_ASSET};

pub const HERO_SIZE: [f32; 2] = [960.0, 540.0];

/// Files written by one export, in write order.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Render the diagram for every variant, in `ModelVariant::ALL` order.
pub fn render_variants(layout: &DiagramLayout) -> Vec<(ModelVariant, String)> {
    ModelVariant::ALL
        .par_iter()
        .map(|v| (*v, render_diagram_svg(layout, *v)))
        .collect()
}

/// Write the static site into `out_dir`, creating it if needed.
pub fn export_site(out_dir: &Path, config: &SiteConfig) -> Result<ExportReport> {
    let layout = DiagramLayout::standard();
    let diagrams = render_variants(&layout);

    let mut hero = SceneGraph::from_layout(&SceneLayout::standard());
    hero.tick(0.0);
    let hero_svg = render_scene_svg(&hero, HERO_SIZE[0], HERO_SIZE[1]);

    let index = render_index(config, &diagrams);

    let mut report = ExportReport::default();
    write_file(&mut report, &out_dir.join("index.html"), &index)?;
    write_file(&mut report, &out_dir.join(HERO_ASSET), &hero_svg)?;
    for (variant, svg) in &diagrams {
        write_file(&mut report, &out_dir.join(model_asset(*variant)), svg)?;
    }

    log::info!(
        "exported {} files ({} bytes) to {} with base path {}",
        report.files.len(),
        report.bytes,
        out_dir.display(),
        config.base_path()
    );
    Ok(report)
}

fn write_file(report: &mut ExportReport, path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GuideError::io(parent, e))?;
    }
    fs::write(path, body).map_err(|e| GuideError::io(path, e))?;
    log::debug!("wrote {} ({} bytes)", path.display(), body.len());
    report.files.push(path.to_path_buf());
    report.bytes += body.len();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_keep_their_order() {
        let rendered = render_variants(&DiagramLayout::standard());
        let order: Vec<ModelVariant> = rendered.iter().map(|(v, _)| *v).collect();
        assert_eq!(order, ModelVariant::ALL.to_vec());
        for (v, svg) in &rendered {
            assert!(svg.contains(&format!("cfa-overlay cfa-{}", v.slug())));
        }
    }
}
