//! JASP vs lavaan comparison cards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Pro,
    Con,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwarePoint {
    pub kind: PointKind,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareCard {
    pub name: &'static str,
    pub badge: &'static str,
    pub accent: Accent,
    pub description: &'static str,
    pub points: &'static [SoftwarePoint],
}

pub const SOFTWARE: [SoftwareCard; 2] = [
    SoftwareCard {
        name: "JASP",
        badge: "Beginner Friendly",
        accent: Accent::Green,
        description: "A versatile, open-source software with a \"point-and-click\" interface. \
Often described as an R front-end.",
        points: &[
            SoftwarePoint { kind: PointKind::Pro, text: "No coding required (GUI)" },
            SoftwarePoint { kind: PointKind::Pro, text: "Real-time results" },
            SoftwarePoint {
                kind: PointKind::Con,
                text: "Limited advanced features (Power analysis, DFI)",
            },
        ],
    },
    SoftwareCard {
        name: "lavaan",
        badge: "Advanced Control",
        accent: Accent::Orange,
        description: "A comprehensive R package for Structural Equation Modeling. Offers \
maximum flexibility and advanced estimation.",
        points: &[
            SoftwarePoint {
                kind: PointKind::Pro,
                text: "Full control over estimation & missing data",
            },
            SoftwarePoint {
                kind: PointKind::Pro,
                text: "Access to add-ons (semTools, dynamic, simsem)",
            },
            SoftwarePoint { kind: PointKind::Con, text: "Steeper learning curve (R Syntax)" },
        ],
    },
];
