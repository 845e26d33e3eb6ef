/// The three structural hypotheses compared in the models section.
///
/// Exactly one variant is active at a time. The default is the correlated
/// factors model, which is also what a fresh window starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    /// Domains are distinct but related: curved correlations between factors.
    CorrelatedFactors,
    /// A general factor loads directly on every item next to the specific factors.
    Bifactor,
    /// A higher-level factor explains the correlations between the factors.
    SecondOrder,
}

impl Default for ModelVariant {
    fn default() -> Self {
        Self::CorrelatedFactors
    }
}

impl ModelVariant {
    /// Selector order, top to bottom.
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::CorrelatedFactors,
        ModelVariant::Bifactor,
        ModelVariant::SecondOrder,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::CorrelatedFactors => "Correlated Factors",
            Self::Bifactor => "Bifactor",
            Self::SecondOrder => "Second-Order",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::CorrelatedFactors => "Most common. Assume domains are distinct but related.",
            Self::Bifactor => {
                "One general factor explains variance in all items alongside specific factors."
            }
            Self::SecondOrder => {
                "A higher-level factor explains the correlations between lower-level factors."
            }
        }
    }

    /// Selector glyph (network / merge / layers).
    pub fn glyph(self) -> &'static str {
        match self {
            Self::CorrelatedFactors => "\u{1F517}",
            Self::Bifactor => "\u{1F500}",
            Self::SecondOrder => "\u{1F4DA}",
        }
    }

    /// Stable slug used for CSS classes, file names and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            Self::CorrelatedFactors => "correlated",
            Self::Bifactor => "bifactor",
            Self::SecondOrder => "second-order",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }

    /// Label of the extra general node, if this variant draws one.
    pub fn general_label(self) -> Option<&'static str> {
        match self {
            Self::CorrelatedFactors => None,
            Self::Bifactor => Some("Gen"),
            Self::SecondOrder => Some("QOL"),
        }
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_correlated() {
        assert_eq!(ModelVariant::default(), ModelVariant::CorrelatedFactors);
    }

    #[test]
    fn slugs_resolve_back() {
        for v in ModelVariant::ALL {
            assert_eq!(ModelVariant::from_slug(v.slug()), Some(v));
        }
        assert_eq!(ModelVariant::from_slug("hierarchical"), None);
    }

    #[test]
    fn only_two_variants_have_general_node() {
        let with_general = ModelVariant::ALL
            .iter()
            .filter(|v| v.general_label().is_some())
            .count();
        assert_eq!(with_general, 2);
        assert!(ModelVariant::CorrelatedFactors.general_label().is_none());
    }
}
