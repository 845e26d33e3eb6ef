//! The six-step best-practices checklist (Table 3 of the tutorial).

/// Glyph shown next to a step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Search,
    Clipboard,
    Settings,
    Activity,
    Merge,
    Chart,
}

impl StepIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Search => "\u{1F50D}",
            Self::Clipboard => "\u{1F4CB}",
            Self::Settings => "\u{2699}",
            Self::Activity => "\u{1F4C8}",
            Self::Merge => "\u{1F500}",
            Self::Chart => "\u{1F4CA}",
        }
    }
}

/// One step of the checklist. Read-only copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistStep {
    pub ordinal: u8,
    pub title: &'static str,
    pub icon: StepIcon,
    /// "Best Practices" column.
    pub recommended: &'static [&'static str],
    /// "Avoid" column.
    pub avoid: &'static [&'static str],
    /// "What to Report" column.
    pub report: &'static [&'static str],
}

/// Column headings, in display order.
pub const COLUMN_TITLES: [&str; 3] = ["Best Practices", "Avoid", "What to Report"];

impl ChecklistStep {
    /// The three lists in column order.
    pub fn columns(&self) -> [&'static [&'static str]; 3] {
        [self.recommended, self.avoid, self.report]
    }
}

pub const CHECKLIST: [ChecklistStep; 6] = [
    ChecklistStep {
        ordinal: 1,
        title: "Model Selection",
        icon: StepIcon::Search,
        recommended: &[
            "Prioritize scales validated in target population.",
            "Verify translation/adaptation evidence.",
            "Review systematic reviews/meta-analyses.",
            "Incorporate control questions (attention checks).",
        ],
        avoid: &[
            "Using scales aimed at specific diagnostics for general research without validation.",
            "Using 'ad hoc' translations without psychometric testing.",
            "Withholding info on alternative structures (e.g., bifactor).",
        ],
        report: &[
            "Justification of psychometric quality (reliability/validity evidence).",
            "Graphical representation of tested models.",
            "Justification for competing models (e.g., 4-factor vs Bifactor).",
        ],
    },
    ChecklistStep {
        ordinal: 2,
        title: "Pre-processing",
        icon: StepIcon::Clipboard,
        recommended: &[
            "Remove careless respondents (attention checks).",
            "Handle missing data (Multiple Imputation).",
            "Check for multicollinearity (VIF > 10).",
            "Analyze ordinal nature of items.",
        ],
        avoid: &[
            "Using single-imputation methods (mean substitution).",
            "Parceling items (hides multidimensionality).",
            "Ignoring missing data if > 5%.",
        ],
        report: &[
            "Method for determining respondent engagement.",
            "Packages/Software versions used.",
            "Missing data handling technique.",
            "Share raw data/covariance matrix if possible.",
        ],
    },
    ChecklistStep {
        ordinal: 3,
        title: "Estimation",
        icon: StepIcon::Settings,
        recommended: &[
            "Use OLS family for ordinal data: WLSMV (DWLS).",
            "Robust versions for non-normality (e.g., Robust DWLS).",
            "Use ML only for continuous data (5+ categories, normal).",
        ],
        avoid: &[
            "Using ML for Likert scales < 5 points.",
            "Ignoring convergence issues.",
        ],
        report: &[
            "Justify estimator choice (based on data type).",
            "Report standardized AND non-standardized parameters.",
            "Specify identification method (marker variable vs fixed variance).",
        ],
    },
    ChecklistStep {
        ordinal: 4,
        title: "Model Fitting",
        icon: StepIcon::Activity,
        recommended: &[
            "Check local fit (factor loadings, residuals).",
            "Use Dynamic Fit Index (DFI) if possible.",
            "Prioritize SRMR (more robust for ordinal).",
            "Use reliability measures like McDonald's Omega.",
        ],
        avoid: &[
            "Relying solely on global fit (RMSEA/CFI) cutoffs.",
            "Using Cronbach's Alpha (assumes tau-equivalence).",
            "Ignoring high residuals or modification indices.",
        ],
        report: &[
            "Scaled Chi-square & df.",
            "RMSEA, CFI, SRMR.",
            "McDonald's Omega (or GLB).",
            "Local fit issues (cross-loadings > 0.3).",
        ],
    },
    ChecklistStep {
        ordinal: 5,
        title: "Comparisons",
        icon: StepIcon::Merge,
        recommended: &[
            "Compare nested models using Scaled Chi-square diff.",
            "Ensure modifications are theoretically justifiable.",
            "Compare using Power Analysis approach if in doubt.",
        ],
        avoid: &[
            "Comparing models using raw Chi-square diff.",
            "Drastic modifications (>20% of model).",
            "Adding error correlations without theoretical reason.",
        ],
        report: &[
            "All modifications made to the initial model.",
            "Justification for error correlations.",
            "Transparency on 'exploratory' changes.",
        ],
    },
    ChecklistStep {
        ordinal: 6,
        title: "Power Analysis",
        icon: StepIcon::Chart,
        recommended: &[
            "A priori sample planning.",
            "Post hoc power analysis using Monte Carlo simulation (simsem).",
            "Consider ordinal nature in power simulations.",
        ],
        avoid: &[
            "Using 'Rule of Thumb' (e.g., N=200) blindly.",
            "Using RMSEA-based power curves for ordinal data.",
        ],
        report: &[
            "Simulation stats: Parameter bias, SE bias, Coverage, Power.",
            "Did power exceed 0.80 for key parameters?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_in_ordinal_order() {
        assert_eq!(CHECKLIST.len(), 6);
        for (i, step) in CHECKLIST.iter().enumerate() {
            assert_eq!(step.ordinal as usize, i + 1, "step {} out of order", step.title);
        }
    }

    #[test]
    fn every_column_has_content() {
        for step in &CHECKLIST {
            for (col, items) in COLUMN_TITLES.iter().zip(step.columns()) {
                assert!(!items.is_empty(), "step {} has empty '{}'", step.ordinal, col);
                assert!(items.iter().all(|s| !s.trim().is_empty()));
            }
        }
    }

    #[test]
    fn estimation_step_names_wlsmv() {
        let estimation = &CHECKLIST[2];
        assert_eq!(estimation.title, "Estimation");
        assert!(estimation.recommended.iter().any(|s| s.contains("WLSMV")));
    }
}
