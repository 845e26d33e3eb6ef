//! Estimator decision tree: ordinal data → condition → recommended estimator.
//!
//! The recommendation is fixed copy from the tutorial; nothing here is computed.

/// One box in the decision row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorStage {
    /// Small uppercase caption above the body.
    pub caption: &'static str,
    /// Body lines, rendered centred.
    pub lines: &'static [&'static str],
    /// Secondary note under the body (only the recommendation has one).
    pub note: Option<&'static str>,
    /// Recommended stage is drawn inverted (dark fill, light text).
    pub emphasized: bool,
    /// Corner marker on the condition box.
    pub flagged: bool,
}

pub const DECISION_TITLE: &str = "Decision: Which Estimator?";

pub const DECISION_STAGES: [EstimatorStage; 3] = [
    EstimatorStage {
        caption: "Data Type",
        lines: &["Likert Scale", "(Ordinal)"],
        note: None,
        emphasized: false,
        flagged: false,
    },
    EstimatorStage {
        caption: "Condition",
        lines: &["< 5 Categories", "or Skewed"],
        note: None,
        emphasized: false,
        flagged: true,
    },
    EstimatorStage {
        caption: "Recommended",
        lines: &["WLSMV"],
        note: Some("(or DWLS)"),
        emphasized: true,
        flagged: false,
    },
];

/// Seconds between the staggered entrance of consecutive stages.
pub const STAGE_STAGGER_SECS: f32 = 0.2;

pub const DECISION_FOOTNOTE: &str = "* Note: ML (Maximum Likelihood) is typically only \
appropriate for continuous data or Likert scales with \u{2265} 5 categories that follow a \
normal distribution.";

/// The recommended stage (last, emphasized).
pub fn recommended_stage() -> &'static EstimatorStage {
    &DECISION_STAGES[DECISION_STAGES.len() - 1]
}
