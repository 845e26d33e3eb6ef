//! Header rendering for `GuideApp`.
//!
//! Draws the brand mark, inline section links (wide windows) or the
//! hamburger and its overlay menu (narrow windows), and the "Read Paper"
//! button. The bar is transparent at the top of the page and turns opaque
//! once the page has scrolled.

use eframe::egui;

use cfa_guide::content::{BRAND_MARK, BRAND_SUBTITLE, BRAND_TITLE};
use cfa_guide::page::{is_narrow, Section};
use cfa_guide::render::theme;

use super::GuideApp;

const MENU_GLYPH: &str = "\u{2630}";
const CLOSE_GLYPH: &str = "\u{2715}";

impl GuideApp {
    /// Render the top navigation bar.
    pub fn draw_header(&mut self, ctx: &egui::Context) {
        let narrow = is_narrow(ctx.screen_rect().width());
        if !narrow {
            self.nav.close_menu();
        }

        let fill = if self.scroll.scrolled() {
            egui::Color32::from_white_alpha(230)
        } else {
            egui::Color32::TRANSPARENT
        };
        let ink = theme::to_color32(theme::BLUE);

        egui::TopBottomPanel::top("header")
            .show_separator_line(self.scroll.scrolled())
            .frame(
                egui::Frame::none()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{}  {}", BRAND_MARK, BRAND_TITLE))
                                .size(20.0)
                                .strong()
                                .color(ink),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand.clicked() {
                        self.request_jump(None);
                    }
                    ui.label(
                        egui::RichText::new(BRAND_SUBTITLE)
                            .size(11.0)
                            .color(theme::to_color32(theme::ORANGE)),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new("Read Paper").color(egui::Color32::WHITE),
                                )
                                .fill(ink)
                                .rounding(16.0),
                            )
                            .clicked()
                        {
                            self.open_paper(ui.ctx());
                        }

                        if narrow {
                            let glyph = if self.nav.menu_open() { CLOSE_GLYPH } else { MENU_GLYPH };
                            if ui.button(egui::RichText::new(glyph).size(18.0)).clicked() {
                                self.nav.toggle_menu();
                            }
                        } else {
                            // Right-to-left: add in reverse so links read left to right.
                            for s in Section::ALL.iter().rev() {
                                if ui.link(egui::RichText::new(s.title()).color(ink)).clicked() {
                                    self.request_jump(Some(*s));
                                }
                                ui.add_space(12.0);
                            }
                        }
                    });
                });
            });

        if narrow && self.nav.menu_open() {
            self.draw_mobile_menu(ctx);
        }
    }

    fn draw_mobile_menu(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("mobile_menu"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(200.0);
                    for s in Section::ALL {
                        let text = egui::RichText::new(s.title()).size(18.0);
                        if ui.selectable_label(false, text).clicked() {
                            self.request_jump(Some(s));
                        }
                    }
                    ui.separator();
                    if ui.button("Read Paper").clicked() {
                        self.open_paper(ui.ctx());
                        self.nav.close_menu();
                    }
                });
            });
    }
}
