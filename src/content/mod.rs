//! Static content registry.
//!
//! Everything the guide displays lives here as `const` data: hero and
//! introduction copy, the estimator decision tree, the six-step checklist and
//! the software comparison. Nothing in this module is mutated at runtime.

pub mod checklist;
pub mod estimator;
pub mod software;

pub use checklist::{ChecklistStep, StepIcon, CHECKLIST, COLUMN_TITLES};
pub use estimator::{EstimatorStage, DECISION_FOOTNOTE, DECISION_STAGES, DECISION_TITLE};
pub use software::{Accent, PointKind, SoftwareCard, SoftwarePoint, SOFTWARE};

// ── Publication ──────────────────────────────────────────────────────────────

pub const PAPER_DOI_URL: &str = "https://doi.org/10.3758/s13428-024-02375-7";
pub const PAPER_TITLE: &str =
    "Best practices for your confirmatory factor analysis: A JASP and lavaan tutorial";
pub const PAPER_CITATION: &str = "Rogers (2024)";
pub const PAPER_JOURNAL: &str = "Behavior Research Methods";

// ── Header / hero ────────────────────────────────────────────────────────────

pub const BRAND_MARK: &str = "\u{03A8}";
pub const BRAND_TITLE: &str = "CFA";
pub const BRAND_SUBTITLE: &str = "BEST PRACTICES";

pub const HERO_KICKER: &str = "Behavior Research Methods \u{2022} 2024";
pub const HERO_TITLE: [&str; 2] = ["Confirmatory", "Factor Analysis"];
pub const HERO_SUBTITLE: &str = "A practical guide to \"Typical CFA\" in Applied Social \
Sciences using JASP and lavaan.";
pub const HERO_CREDIT: &str = "Based on the tutorial by Pablo Rogers";
pub const HERO_CTA: &str = "START GUIDE";

// ── Introduction ─────────────────────────────────────────────────────────────

pub const INTRO_KICKER: &str = "Context";
pub const INTRO_TITLE: &str = "The \"Typical\" CFA Problem";
pub const INTRO_LEAD: &str = "Most CFA textbooks focus on continuous data and Maximum \
Likelihood (ML) estimation. However, applied social sciences typically use ordinal data \
(Likert scales).";
pub const WHY_TITLE: &str = "Why it matters";
pub const WHY_BODY: &str = "Using ML on ordinal data can lead to biased parameters and \
incorrect fit indices. The \"Typical CFA\" requires specific handling:";

/// (is_problem, label, text)
pub const WHY_POINTS: [(bool, &str, &str); 2] = [
    (
        true,
        "The Error:",
        "Treating 5-point Likert scales as continuous and using default ML estimation.",
    ),
    (
        false,
        "The Solution:",
        "Using WLSMV (Weighted Least Squares Mean and Variance adjusted) or DWLS \
estimators designed for categorical data.",
    ),
];

// ── Models ───────────────────────────────────────────────────────────────────

pub const MODELS_KICKER: &str = "Visualization";
pub const MODELS_TITLE: &str = "Structural Models";
pub const MODELS_LEAD: &str = "A typical validation often compares different structural \
hypotheses. Explore the three common models discussed in the tutorial.";
pub const MODELS_SELECT_TITLE: &str = "Select Model";

// ── Guidelines ───────────────────────────────────────────────────────────────

pub const GUIDELINES_KICKER: &str = "Methodology";
pub const GUIDELINES_TITLE: &str = "Best Practices Checklist";
pub const GUIDELINES_LEAD: &str = "A comprehensive guide for conducting a typical CFA, from \
model selection to reporting.";

// ── Footer ───────────────────────────────────────────────────────────────────

pub const FOOTER_LINKS: [&str; 2] = ["Download JASP File", "R Scripts"];
pub const FOOTER_NOTE: &str = "Visualization generated by AI based on the published manuscript.";
