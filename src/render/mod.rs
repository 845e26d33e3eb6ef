pub mod theme;
pub mod scene_graph;
pub mod projection;
pub mod svg;
pub mod diagram_paint;
pub mod scene_paint;

/// How the hero scene is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroMode {
    /// Animated 3D factor model
    Animated,
    /// Frozen on the current pose (reduced motion)
    Still,
}

impl Default for HeroMode {
    fn default() -> Self {
        Self::Animated
    }
}

impl HeroMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Animated => Self::Still,
            Self::Still => Self::Animated,
        }
    }
}
