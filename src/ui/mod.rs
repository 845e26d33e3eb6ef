//! Small stateless egui helpers shared by the page sections.

use eframe::egui;

use cfa_guide::render::theme;

// ─── Typography ───────────────────────────────────────────────────────────────

/// Uppercase orange label above a section title.
pub fn kicker(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(12.0)
            .strong()
            .color(theme::to_color32(theme::ORANGE)),
    );
}

/// Kicker, title and lead paragraph. Returns the title's rect.
pub fn section_heading(ui: &mut egui::Ui, kicker_text: &str, title: &str, lead: &str) -> egui::Rect {
    kicker(ui, kicker_text);
    let rect = ui
        .label(
            egui::RichText::new(title)
                .size(32.0)
                .strong()
                .color(theme::to_color32(theme::BLUE)),
        )
        .rect;
    if !lead.is_empty() {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(lead).size(16.0));
    }
    ui.add_space(18.0);
    rect
}

/// `marker text` rows, one per item.
pub fn bullet_list(ui: &mut egui::Ui, items: &[&str], marker: &str, marker_color: egui::Color32) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(marker).color(marker_color).strong());
            ui.label(*item);
        });
    }
}

/// Small pill label.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).color(egui::Color32::WHITE));
        });
}

/// White rounded card.
pub fn card(fill: egui::Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(20.0))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(226)))
}

// ─── Layout ───────────────────────────────────────────────────────────────────

/// `count` side-by-side columns, or stacked blocks on narrow windows.
pub fn responsive_columns(
    ui: &mut egui::Ui,
    narrow: bool,
    count: usize,
    mut add: impl FnMut(&mut egui::Ui, usize),
) {
    if narrow {
        for i in 0..count {
            add(ui, i);
            ui.add_space(12.0);
        }
    } else {
        ui.columns(count, |cols| {
            for (i, col) in cols.iter_mut().enumerate() {
                add(col, i);
            }
        });
    }
}

/// Horizontal padding that centres a column of at most `max_width`.
pub fn side_padding(available: f32, max_width: f32) -> f32 {
    ((available - max_width) * 0.5).max(24.0)
}

// ─── Animation ────────────────────────────────────────────────────────────────

/// Opacity of the `index`-th element of a staggered fade-in, `elapsed`
/// seconds after the group appeared.
pub fn staggered_opacity(elapsed: f32, index: usize, stagger: f32, fade: f32) -> f32 {
    let local = elapsed - index as f32 * stagger;
    if fade <= 0.0 {
        return if local >= 0.0 { 1.0 } else { 0.0 };
    }
    (local / fade).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_starts_each_element_later() {
        assert_eq!(staggered_opacity(0.0, 0, 0.2, 0.5), 0.0);
        assert_eq!(staggered_opacity(0.1, 1, 0.2, 0.5), 0.0);
        assert!((staggered_opacity(0.45, 1, 0.2, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(staggered_opacity(5.0, 2, 0.2, 0.5), 1.0);
        assert_eq!(staggered_opacity(0.4, 2, 0.2, 0.0), 1.0);
    }

    #[test]
    fn padding_centres_wide_windows() {
        assert_eq!(side_padding(1300.0, 1100.0), 100.0);
        assert_eq!(side_padding(600.0, 1100.0), 24.0);
    }
}
