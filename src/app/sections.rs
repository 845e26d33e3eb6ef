//! Page body for `GuideApp`: hero, introduction with the estimator decision
//! tree, model comparison, checklist, software cards and footer.

use eframe::egui;

use cfa_guide::content::{
    self, Accent, EstimatorStage, PointKind, CHECKLIST, COLUMN_TITLES, DECISION_STAGES, SOFTWARE,
};
use cfa_guide::content::estimator::STAGE_STAGGER_SECS;
use cfa_guide::page::{is_narrow, Section};
use cfa_guide::render::diagram_paint::{paint_diagram, variant_selector};
use cfa_guide::render::{theme, HeroMode};

use super::GuideApp;
use crate::ui;

const MAX_CONTENT_WIDTH: f32 = 1100.0;
const STAGE_FADE_SECS: f32 = 0.5;

pub fn page_background() -> egui::Color32 {
    theme::to_color32(theme::CREAM)
}

fn color(c: theme::Rgba) -> egui::Color32 {
    theme::to_color32(c)
}

impl GuideApp {
    /// Render every section inside the page scroll area.
    pub fn draw_sections(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let origin = ui.min_rect().top();
        let pad = ui::side_padding(ui.available_width(), MAX_CONTENT_WIDTH);
        let narrow = is_narrow(ui.available_width());
        let frame = egui::Frame::none().inner_margin(egui::Margin {
            left: pad,
            right: pad,
            top: 56.0,
            bottom: 56.0,
        });

        self.draw_hero(ui, ctx);

        self.mark_section(Section::Introduction, ui, origin);
        frame.show(ui, |ui| self.draw_introduction(ui, ctx, narrow));

        self.mark_section(Section::Models, ui, origin);
        frame.show(ui, |ui| self.draw_models(ui, ctx, narrow));

        self.mark_section(Section::Guidelines, ui, origin);
        frame.show(ui, |ui| draw_guidelines(ui, narrow));

        self.mark_section(Section::Software, ui, origin);
        frame.show(ui, |ui| draw_software(ui, narrow));

        self.draw_footer(ui, pad);
    }

    fn mark_section(&mut self, section: Section, ui: &egui::Ui, origin: f32) {
        self.section_tops.insert(section, ui.cursor().top() - origin);
    }

    // ── Hero ──

    fn draw_hero(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let height = (ui.available_width() * 0.45).clamp(300.0, 520.0);
        self.hero.paint(ui, ctx, height);

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui::kicker(ui, content::HERO_KICKER);
            for line in content::HERO_TITLE {
                ui.label(egui::RichText::new(line).size(44.0).strong().color(color(theme::BLUE)));
            }
            ui.add_space(8.0);
            ui.label(egui::RichText::new(content::HERO_SUBTITLE).size(18.0));
            ui.label(egui::RichText::new(content::HERO_CREDIT).italics());
            ui.add_space(16.0);

            let start = egui::Button::new(
                egui::RichText::new(content::HERO_CTA).strong().color(egui::Color32::WHITE),
            )
            .fill(color(theme::ORANGE))
            .rounding(20.0)
            .min_size(egui::vec2(160.0, 40.0));
            if ui.add(start).clicked() {
                self.request_jump(Some(Section::Introduction));
            }

            let motion = match self.hero_mode {
                HeroMode::Animated => "\u{23F8} Pause motion",
                HeroMode::Still => "\u{25B6} Resume motion",
            };
            if ui.small_button(motion).clicked() {
                self.hero_mode = self.hero_mode.toggled();
                log::debug!("hero mode {:?}", self.hero_mode);
            }
        });
        ui.add_space(24.0);
    }

    // ── Introduction ──

    fn draw_introduction(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, narrow: bool) {
        ui::section_heading(ui, content::INTRO_KICKER, content::INTRO_TITLE, content::INTRO_LEAD);

        ui::card(egui::Color32::WHITE).show(ui, |ui| {
            ui.label(egui::RichText::new(content::WHY_TITLE).size(20.0).strong());
            ui.label(content::WHY_BODY);
            ui.add_space(8.0);
            for (problem, label, body) in content::WHY_POINTS {
                let (fill, ink) = if problem {
                    (theme::RED_SOFT, theme::RED)
                } else {
                    (theme::BLUE_SOFT, theme::BLUE)
                };
                egui::Frame::none()
                    .fill(color(fill))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(label).strong().color(color(ink)));
                            ui.label(body);
                        });
                    });
                ui.add_space(6.0);
            }
        });

        ui.add_space(24.0);
        ui.label(egui::RichText::new(content::DECISION_TITLE).size(20.0).strong());
        ui.add_space(8.0);

        let now = ctx.input(|i| i.time);
        let probe = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(ui.available_width(), 120.0));
        if self.decision_shown_at.is_none() && ui.is_rect_visible(probe) {
            self.decision_shown_at = Some(now);
        }
        let elapsed = self.decision_shown_at.map_or(0.0, |t| (now - t) as f32);

        let mut fading = false;
        ui::responsive_columns(ui, narrow, DECISION_STAGES.len(), |ui, i| {
            let alpha = match self.decision_shown_at {
                Some(_) => ui::staggered_opacity(elapsed, i, STAGE_STAGGER_SECS, STAGE_FADE_SECS),
                None => 0.0,
            };
            fading |= alpha < 1.0;
            draw_stage(ui, &DECISION_STAGES[i], alpha);
        });
        if fading {
            ctx.request_repaint();
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new(content::DECISION_FOOTNOTE).small().weak());
    }

    // ── Models ──

    fn draw_models(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, narrow: bool) {
        ui::section_heading(ui, content::MODELS_KICKER, content::MODELS_TITLE, content::MODELS_LEAD);

        ui.label(egui::RichText::new(content::MODELS_SELECT_TITLE).size(18.0).strong());
        if let Some(v) = variant_selector(ui, self.diagram.active()) {
            self.diagram.select(v);
        }
        ui.add_space(6.0);
        ui.label(self.diagram.active().blurb());
        ui.add_space(12.0);

        if narrow {
            paint_diagram(ui, ctx, &mut self.diagram);
        } else {
            ui.vertical_centered(|ui| paint_diagram(ui, ctx, &mut self.diagram));
        }
    }

    // ── Footer ──

    fn draw_footer(&self, ui: &mut egui::Ui, pad: f32) {
        let white = egui::Color32::WHITE;
        egui::Frame::none()
            .fill(color(theme::BLUE))
            .inner_margin(egui::Margin { left: pad, right: pad, top: 40.0, bottom: 40.0 })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}  {}", content::BRAND_MARK, content::BRAND_TITLE))
                            .size(22.0)
                            .strong()
                            .color(color(theme::ORANGE)),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{}. {}. {}",
                            content::PAPER_CITATION,
                            content::PAPER_TITLE,
                            content::PAPER_JOURNAL
                        ))
                        .color(white),
                    );
                    ui.hyperlink_to(
                        egui::RichText::new(self.config.paper_url().as_str()).color(color(theme::GREEN)),
                        self.config.paper_url().as_str(),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(content::FOOTER_LINKS.join("  \u{2022}  "))
                            .color(white.gamma_multiply(0.8)),
                    );
                    ui.label(egui::RichText::new(content::FOOTER_NOTE).small().color(white.gamma_multiply(0.6)));
                });
            });
    }
}

fn draw_stage(ui: &mut egui::Ui, stage: &EstimatorStage, alpha: f32) {
    let (fill, ink) = if stage.emphasized {
        (color(theme::BLUE), egui::Color32::WHITE)
    } else {
        (egui::Color32::WHITE, color(theme::BLUE))
    };
    let stroke = if stage.flagged {
        egui::Stroke::new(1.5, color(theme::ORANGE).gamma_multiply(alpha))
    } else {
        egui::Stroke::NONE
    };

    egui::Frame::none()
        .fill(fill.gamma_multiply(alpha))
        .stroke(stroke)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(stage.caption.to_uppercase())
                        .size(11.0)
                        .color(color(theme::ORANGE).gamma_multiply(alpha)),
                );
                for line in stage.lines {
                    let size = if stage.emphasized { 26.0 } else { 16.0 };
                    ui.label(
                        egui::RichText::new(*line).size(size).strong().color(ink.gamma_multiply(alpha)),
                    );
                }
                if let Some(note) = stage.note {
                    ui.label(egui::RichText::new(note).small().color(ink.gamma_multiply(alpha * 0.8)));
                }
            });
        });
}

// ── Guidelines ──

fn draw_guidelines(ui: &mut egui::Ui, narrow: bool) {
    ui::section_heading(
        ui,
        content::GUIDELINES_KICKER,
        content::GUIDELINES_TITLE,
        content::GUIDELINES_LEAD,
    );

    let column_style = [
        ("\u{2713}", color(theme::GREEN)),
        ("\u{2717}", color(theme::RED)),
        ("\u{2022}", color(theme::BLUE)),
    ];

    for step in &CHECKLIST {
        ui::card(egui::Color32::WHITE).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(step.icon.glyph()).size(22.0));
                ui.label(
                    egui::RichText::new(format!("{}. {}", step.ordinal, step.title))
                        .size(20.0)
                        .strong()
                        .color(color(theme::BLUE)),
                );
            });
            ui.add_space(8.0);

            let columns = step.columns();
            ui::responsive_columns(ui, narrow, columns.len(), |ui, i| {
                let (marker, tint) = column_style[i];
                ui.label(egui::RichText::new(COLUMN_TITLES[i]).strong().color(tint));
                ui::bullet_list(ui, columns[i], marker, tint);
            });
        });
        ui.add_space(14.0);
    }
}

// ── Software ──

fn draw_software(ui: &mut egui::Ui, narrow: bool) {
    ui::section_heading(ui, "Tools", Section::Software.title(), "");

    ui::responsive_columns(ui, narrow, SOFTWARE.len(), |ui, i| {
        let card = &SOFTWARE[i];
        let accent = match card.accent {
            Accent::Green => color(theme::GREEN),
            Accent::Orange => color(theme::ORANGE),
        };
        ui::card(egui::Color32::WHITE).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(card.name).size(22.0).strong().color(color(theme::BLUE)));
                ui::badge(ui, card.badge, accent);
            });
            ui.label(card.description);
            ui.add_space(8.0);
            for point in card.points {
                let (marker, tint) = match point.kind {
                    PointKind::Pro => ("\u{2713}", color(theme::GREEN)),
                    PointKind::Con => ("\u{2717}", color(theme::RED)),
                };
                ui::bullet_list(ui, &[point.text], marker, tint);
            }
        });
    });
}
