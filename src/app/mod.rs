//! `GuideApp`: the top-level egui application state.
//!
//! This module declares the `GuideApp` struct and its `eframe::App` impl.
//! Drawing is split across the sibling sub-modules:
//!
//! - `header`  : fixed navigation bar and mobile menu
//! - `sections`: hero, introduction, models, guidelines, software, footer

pub mod header;
pub mod sections;

use std::collections::HashMap;

use eframe::egui;

use cfa_guide::config::SiteConfig;
use cfa_guide::page::{scroll_target_with, NavState, ScrollState, Section, SmoothScroll};
use cfa_guide::render::diagram_paint::DiagramState;
use cfa_guide::render::scene_paint::ScenePainter;
use cfa_guide::render::HeroMode;

// ─── Application state ───────────────────────────────────────────────────────

pub struct GuideApp {
    pub config: SiteConfig,
    pub diagram: DiagramState,
    pub hero: ScenePainter,
    pub hero_mode: HeroMode,
    pub scroll: ScrollState,
    pub nav: NavState,
    /// Current vertical offset of the page
    pub scroll_offset: f32,
    /// In-flight animated jump
    pub smooth: Option<SmoothScroll>,
    /// Content-relative top of each section, recorded while drawing
    pub section_tops: HashMap<Section, f32>,
    /// Navigation requested during this frame; `Some(None)` is "top of page"
    pub pending_jump: Option<Option<Section>>,
    /// When the decision tree first came into view
    pub decision_shown_at: Option<f64>,
}

impl GuideApp {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            scroll: ScrollState::with_threshold(config.scroll_threshold),
            config,
            diagram: DiagramState::new(),
            hero: ScenePainter::new(),
            hero_mode: HeroMode::default(),
            nav: NavState::default(),
            scroll_offset: 0.0,
            smooth: None,
            section_tops: HashMap::new(),
            pending_jump: None,
            decision_shown_at: None,
        }
    }

    /// Queue navigation to `section` (or the top). Resolved after the page is
    /// laid out so the target offset is current.
    pub fn request_jump(&mut self, section: Option<Section>) {
        self.nav.navigate(section);
        self.pending_jump = Some(section);
    }

    fn resolve_jump(&mut self, now: f64) {
        let Some(section) = self.pending_jump.take() else { return };
        let top = match section {
            Some(s) => match self.section_tops.get(&s) {
                Some(top) => *top,
                None => {
                    log::warn!("section {} has not been laid out yet", s.anchor());
                    return;
                }
            },
            None => 0.0,
        };
        let target = scroll_target_with(top, self.config.header_offset);
        self.smooth = Some(SmoothScroll::new(self.scroll_offset, target, now));
    }

    pub fn open_paper(&self, ctx: &egui::Context) {
        log::info!("opening {}", self.config.paper_url());
        ctx.open_url(egui::OpenUrl::new_tab(self.config.paper_url().as_str()));
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.hero.paused = self.hero_mode == HeroMode::Still;

        self.draw_header(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(sections::page_background()))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false]);

                if let Some(smooth) = self.smooth {
                    let (offset, done) = smooth.sample(now);
                    area = area.vertical_scroll_offset(offset);
                    if done {
                        self.smooth = None;
                    } else {
                        ctx.request_repaint();
                    }
                }

                let output = area.show(ui, |ui| self.draw_sections(ui, ctx));
                self.scroll_offset = output.state.offset.y;
            });

        if self.scroll.observe(self.scroll_offset) {
            log::debug!("header {}", if self.scroll.scrolled() { "opaque" } else { "transparent" });
            ctx.request_repaint();
        }

        self.resolve_jump(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuideApp {
        GuideApp::new(SiteConfig::standard().unwrap())
    }

    #[test]
    fn jump_targets_clear_the_header() {
        let mut app = app();
        app.section_tops.insert(Section::Models, 1500.0);
        app.scroll_offset = 200.0;
        app.request_jump(Some(Section::Models));
        app.resolve_jump(3.0);
        let smooth = app.smooth.unwrap();
        assert_eq!(smooth.target(), 1400.0);
        assert_eq!(smooth.sample(3.0).0, 200.0);
        assert!(app.pending_jump.is_none());
    }

    #[test]
    fn jump_to_top_and_menu_closes() {
        let mut app = app();
        app.nav.toggle_menu();
        app.scroll_offset = 900.0;
        app.request_jump(None);
        assert!(!app.nav.menu_open());
        app.resolve_jump(0.0);
        assert_eq!(app.smooth.unwrap().target(), 0.0);
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut app = app();
        app.request_jump(Some(Section::Software));
        app.resolve_jump(0.0);
        assert!(app.smooth.is_none());
    }
}
