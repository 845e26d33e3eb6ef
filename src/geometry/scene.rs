//! 3-D layout of the hero factor model.
//!
//! Factors sit in a row at y = 1.5, their items two units below. Links are
//! every loading (factor → item) followed by a ring of correlations between
//! neighbouring factors, closed from the last factor back to the first.

use super::{centered_offset, NodeKind};

pub const FACTOR_Y: f32 = 1.5;
pub const ITEM_DROP: f32 = 2.0;
pub const FACTOR_SPACING: f32 = 1.0;
pub const ITEM_SPACING: f32 = 0.4;

pub const STANDARD_FACTORS: [&str; 4] = ["Physical", "Psych", "Social", "Env"];
pub const STANDARD_ITEMS_PER_FACTOR: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNodeSpec {
    pub id: String,
    pub kind: NodeKind,
    pub position: [f32; 3],
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Loading,
    Correlation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLink {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub factors: Vec<SceneNodeSpec>,
    pub items: Vec<SceneNodeSpec>,
    pub links: Vec<SceneLink>,
}

impl SceneLayout {
    /// Four domains, three items each.
    pub fn standard() -> Self {
        Self::build(&STANDARD_FACTORS, STANDARD_ITEMS_PER_FACTOR)
    }

    pub fn build(labels: &[&str], items_per_factor: usize) -> Self {
        let n = labels.len();
        let factors: Vec<SceneNodeSpec> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| SceneNodeSpec {
                id: format!("F{}", i + 1),
                kind: NodeKind::Latent,
                position: [centered_offset(i, n, FACTOR_SPACING), FACTOR_Y, 0.0],
                label: Some((*label).to_string()),
            })
            .collect();

        let mut items = Vec::with_capacity(n * items_per_factor);
        let mut links = Vec::with_capacity(n * (items_per_factor + 1));

        for (i, f) in factors.iter().enumerate() {
            for j in 0..items_per_factor {
                let x = f.position[0] + centered_offset(j, items_per_factor, ITEM_SPACING);
                let pos = [x, f.position[1] - ITEM_DROP, 0.0];
                items.push(SceneNodeSpec {
                    id: format!("{}_{}", f.id, j),
                    kind: NodeKind::Item,
                    position: pos,
                    label: None,
                });
                links.push(SceneLink { start: f.position, end: pos, kind: LinkKind::Loading });
            }

            if n > 1 {
                let next = &factors[(i + 1) % n];
                links.push(SceneLink {
                    start: f.position,
                    end: next.position,
                    kind: LinkKind::Correlation,
                });
            }
        }

        Self { factors, items, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_positions() {
        let layout = SceneLayout::standard();
        let xs: Vec<f32> = layout.factors.iter().map(|f| f.position[0]).collect();
        assert_eq!(xs, vec![-1.5, -0.5, 0.5, 1.5]);
        assert_eq!(layout.items.len(), 12);
        assert_eq!(layout.items[0].id, "F1_0");
        let first = layout.items[0].position;
        assert!((first[0] - -1.9).abs() < 1e-6);
        assert!((first[1] - -0.5).abs() < 1e-6);
    }

    #[test]
    fn links_are_loadings_plus_closed_ring() {
        let layout = SceneLayout::standard();
        let loadings = layout.links.iter().filter(|l| l.kind == LinkKind::Loading).count();
        let ring: Vec<&SceneLink> =
            layout.links.iter().filter(|l| l.kind == LinkKind::Correlation).collect();
        assert_eq!(loadings, 12);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[3].start, [1.5, 1.5, 0.0]);
        assert_eq!(ring[3].end, [-1.5, 1.5, 0.0]);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(SceneLayout::standard(), SceneLayout::standard());
    }
}
