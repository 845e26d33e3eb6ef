//! 2-D layout of the model comparison diagram.
//!
//! Three rows on a 500×350 surface: the general node on top (only for the
//! bifactor and second-order variants), latent factors in the middle, observed
//! items at the bottom. The base layer (items, factors, loadings) is the same
//! for every variant; [`DiagramLayout::overlay`] yields the variant-specific
//! edges and extra node.

use crate::model::ModelVariant;

use super::{all_finite, centered_offset, NodeKind};

pub const SURFACE_WIDTH: f32 = 500.0;
pub const SURFACE_HEIGHT: f32 = 350.0;

pub const ITEM_Y: f32 = 250.0;
pub const LATENT_Y: f32 = 150.0;
pub const GENERAL_Y: f32 = 60.0;

pub const CENTER_X: f32 = 250.0;
pub const FACTOR_SPACING: f32 = 100.0;
pub const ITEM_SPACING: f32 = 40.0;

/// Half edge of an item square.
pub const ITEM_HALF: f32 = 15.0;
/// Radius of latent and general circles.
pub const FACTOR_RADIUS: f32 = 22.0;

pub const STANDARD_FACTORS: [&str; 4] = ["Phys", "Psych", "Soc", "Env"];
pub const STANDARD_ITEMS_PER_FACTOR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        all_finite(&[self.x, self.y])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    pub id: String,
    pub kind: NodeKind,
    pub center: Point,
    pub label: Option<String>,
    /// Index of the owning factor (items only).
    pub parent: Option<usize>,
}

/// Visual role of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    /// Factor → item
    Loading,
    /// Factor ↔ factor (dashed curve)
    Correlation,
    /// Second-order factor → factor
    HigherOrder,
    /// General factor → item (bifactor)
    GeneralLoading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgePath {
    Line { from: Point, to: Point },
    Quadratic { from: Point, control: Point, to: Point },
}

impl EdgePath {
    pub fn start(&self) -> Point {
        match *self {
            EdgePath::Line { from, .. } | EdgePath::Quadratic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            EdgePath::Line { to, .. } | EdgePath::Quadratic { to, .. } => to,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            EdgePath::Line { from, to } => from.is_finite() && to.is_finite(),
            EdgePath::Quadratic { from, control, to } => {
                from.is_finite() && control.is_finite() && to.is_finite()
            }
        }
    }

    /// Polyline approximation with `segments + 1` points.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        match *self {
            EdgePath::Line { from, to } => vec![from, to],
            EdgePath::Quadratic { from, control, to } => {
                let n = segments.max(1);
                (0..=n)
                    .map(|i| {
                        let t = i as f32 / n as f32;
                        let u = 1.0 - t;
                        Point::new(
                            u * u * from.x + 2.0 * u * t * control.x + t * t * to.x,
                            u * u * from.y + 2.0 * u * t * control.y + t * t * to.y,
                        )
                    })
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramEdge {
    pub path: EdgePath,
    pub style: EdgeStyle,
}

/// Variant-specific additions drawn on top of the base layer.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantOverlay {
    pub variant: ModelVariant,
    pub general: Option<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

/// Base layer of the diagram plus the data needed for each overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    pub factors: Vec<DiagramNode>,
    pub items: Vec<DiagramNode>,
    pub loadings: Vec<DiagramEdge>,
}

impl DiagramLayout {
    /// Four domains, two items each.
    pub fn standard() -> Self {
        Self::build(&STANDARD_FACTORS, STANDARD_ITEMS_PER_FACTOR)
    }

    pub fn build(labels: &[&str], items_per_factor: usize) -> Self {
        let n = labels.len();
        let factors: Vec<DiagramNode> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| DiagramNode {
                id: (i + 1).to_string(),
                kind: NodeKind::Latent,
                center: Point::new(CENTER_X + centered_offset(i, n, FACTOR_SPACING), LATENT_Y),
                label: Some((*label).to_string()),
                parent: None,
            })
            .collect();

        let mut items = Vec::with_capacity(n * items_per_factor);
        let mut loadings = Vec::with_capacity(n * items_per_factor);
        for (fi, factor) in factors.iter().enumerate() {
            for j in 0..items_per_factor {
                let x = factor.center.x + centered_offset(j, items_per_factor, ITEM_SPACING);
                let item = DiagramNode {
                    id: format!("{}{}", factor.id, item_suffix(j)),
                    kind: NodeKind::Item,
                    center: Point::new(x, ITEM_Y),
                    label: None,
                    parent: Some(fi),
                };
                loadings.push(DiagramEdge {
                    path: EdgePath::Line {
                        from: Point::new(factor.center.x, LATENT_Y + FACTOR_RADIUS),
                        to: Point::new(x, ITEM_Y - ITEM_HALF),
                    },
                    style: EdgeStyle::Loading,
                });
                items.push(item);
            }
        }

        Self { factors, items, loadings }
    }

    /// Items owned by factor `index`.
    pub fn items_of(&self, index: usize) -> impl Iterator<Item = &DiagramNode> {
        self.items.iter().filter(move |it| it.parent == Some(index))
    }

    /// The edge set (and extra node) drawn for `variant`.
    pub fn overlay(&self, variant: ModelVariant) -> VariantOverlay {
        match variant {
            ModelVariant::CorrelatedFactors => VariantOverlay {
                variant,
                general: None,
                edges: self.correlation_edges(),
            },
            ModelVariant::SecondOrder => VariantOverlay {
                variant,
                general: Some(general_node(variant)),
                edges: self
                    .factors
                    .iter()
                    .map(|f| DiagramEdge {
                        path: EdgePath::Line {
                            from: general_anchor(),
                            to: Point::new(f.center.x, LATENT_Y - FACTOR_RADIUS),
                        },
                        style: EdgeStyle::HigherOrder,
                    })
                    .collect(),
            },
            ModelVariant::Bifactor => VariantOverlay {
                variant,
                general: Some(general_node(variant)),
                edges: self
                    .items
                    .iter()
                    .map(|it| DiagramEdge {
                        path: EdgePath::Line {
                            from: general_anchor(),
                            to: Point::new(it.center.x, ITEM_Y - ITEM_HALF),
                        },
                        style: EdgeStyle::GeneralLoading,
                    })
                    .collect(),
            },
        }
    }

    /// One wide arc from the first to the last factor, then one short arc
    /// between each adjacent pair.
    fn correlation_edges(&self) -> Vec<DiagramEdge> {
        let mut edges = Vec::new();
        let (first, last) = match (self.factors.first(), self.factors.last()) {
            (Some(f), Some(l)) if self.factors.len() > 1 => (f, l),
            _ => return edges,
        };

        edges.push(DiagramEdge {
            path: EdgePath::Quadratic {
                from: Point::new(first.center.x, LATENT_Y - FACTOR_RADIUS),
                control: Point::new(CENTER_X, LATENT_Y - 80.0),
                to: Point::new(last.center.x, LATENT_Y - FACTOR_RADIUS),
            },
            style: EdgeStyle::Correlation,
        });

        for pair in self.factors.windows(2) {
            let (a, b) = (pair[0].center.x, pair[1].center.x);
            edges.push(DiagramEdge {
                path: EdgePath::Quadratic {
                    from: Point::new(a + 10.0, LATENT_Y - 20.0),
                    control: Point::new((a + b) * 0.5, LATENT_Y - 50.0),
                    to: Point::new(b - 10.0, LATENT_Y - 20.0),
                },
                style: EdgeStyle::Correlation,
            });
        }
        edges
    }
}

fn item_suffix(j: usize) -> char {
    (b'a' + (j % 26) as u8) as char
}

fn general_node(variant: ModelVariant) -> DiagramNode {
    DiagramNode {
        id: variant.slug().to_string(),
        kind: NodeKind::General,
        center: Point::new(CENTER_X, GENERAL_Y),
        label: variant.general_label().map(str::to_string),
        parent: None,
    }
}

/// Bottom of the general node, where its paths start.
fn general_anchor() -> Point {
    Point::new(CENTER_X, GENERAL_Y + FACTOR_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_coordinates() {
        let layout = DiagramLayout::standard();
        let xs: Vec<f32> = layout.factors.iter().map(|f| f.center.x).collect();
        assert_eq!(xs, vec![100.0, 200.0, 300.0, 400.0]);
        assert_eq!(layout.items.len(), 8);
        assert_eq!(layout.items[0].id, "1a");
        assert_eq!(layout.items[0].center, Point::new(80.0, ITEM_Y));
        assert_eq!(layout.items[1].center, Point::new(120.0, ITEM_Y));
        assert_eq!(layout.loadings.len(), 8);
        assert_eq!(layout.items_of(2).count(), 2);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(DiagramLayout::standard(), DiagramLayout::standard());
        for v in ModelVariant::ALL {
            let a = DiagramLayout::standard().overlay(v);
            let b = DiagramLayout::standard().overlay(v);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn overlay_shapes_per_variant() {
        let layout = DiagramLayout::standard();

        let corr = layout.overlay(ModelVariant::CorrelatedFactors);
        assert!(corr.general.is_none());
        assert_eq!(corr.edges.len(), 4);
        assert!(corr.edges.iter().all(|e| e.style == EdgeStyle::Correlation));

        let second = layout.overlay(ModelVariant::SecondOrder);
        assert_eq!(second.general.as_ref().and_then(|n| n.label.as_deref()), Some("QOL"));
        assert_eq!(second.edges.len(), 4);
        assert!(second.edges.iter().all(|e| e.style == EdgeStyle::HigherOrder));

        let bi = layout.overlay(ModelVariant::Bifactor);
        assert_eq!(bi.general.as_ref().and_then(|n| n.label.as_deref()), Some("Gen"));
        assert_eq!(bi.edges.len(), layout.items.len());
        assert!(bi.edges.iter().all(|e| e.path.start() == Point::new(250.0, 82.0)));
    }

    #[test]
    fn correlation_arcs_match_reference_points() {
        let corr = DiagramLayout::standard().overlay(ModelVariant::CorrelatedFactors);
        assert_eq!(
            corr.edges[0].path,
            EdgePath::Quadratic {
                from: Point::new(100.0, 128.0),
                control: Point::new(250.0, 70.0),
                to: Point::new(400.0, 128.0),
            }
        );
        assert_eq!(
            corr.edges[2].path,
            EdgePath::Quadratic {
                from: Point::new(210.0, 130.0),
                control: Point::new(250.0, 100.0),
                to: Point::new(290.0, 130.0),
            }
        );
    }

    #[test]
    fn single_factor_has_no_correlations() {
        let layout = DiagramLayout::build(&["Only"], 3);
        assert_eq!(layout.factors[0].center.x, CENTER_X);
        assert!(layout.overlay(ModelVariant::CorrelatedFactors).edges.is_empty());
    }

    #[test]
    fn quadratic_sampling_hits_endpoints() {
        let path = EdgePath::Quadratic {
            from: Point::new(0.0, 0.0),
            control: Point::new(5.0, 10.0),
            to: Point::new(10.0, 0.0),
        };
        let pts = path.sample(8);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert_eq!(pts[8], Point::new(10.0, 0.0));
        assert!((pts[4].y - 5.0).abs() < 1e-5);
    }
}
