//! View-local page state: sections, header scroll flag, mobile menu and
//! smooth in-page navigation.

/// Scroll offset past which the header turns opaque.
pub const SCROLL_THRESHOLD: f32 = 50.0;
/// Height of the fixed header that anchored sections must clear.
pub const HEADER_OFFSET: f32 = 100.0;
/// Windows narrower than this show the hamburger instead of inline links.
pub const NARROW_WIDTH: f32 = 768.0;
pub const SMOOTH_SCROLL_SECS: f32 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Introduction,
    Models,
    Guidelines,
    Software,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Introduction,
        Section::Models,
        Section::Guidelines,
        Section::Software,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Models => "models",
            Self::Guidelines => "guidelines",
            Self::Software => "software",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Models => "Models",
            Self::Guidelines => "Guidelines",
            Self::Software => "Software",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Tracks whether the page has scrolled past the header threshold.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    threshold: f32,
    scrolled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD)
    }
}

impl ScrollState {
    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold, scrolled: false }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the current offset. Returns `true` only when the flag flips.
    pub fn observe(&mut self, offset: f32) -> bool {
        let now = offset > self.threshold;
        if now == self.scrolled {
            return false;
        }
        self.scrolled = now;
        true
    }
}

/// Mobile menu overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavState {
    menu_open: bool,
}

impl NavState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        log::debug!("menu {}", if self.menu_open { "opened" } else { "closed" });
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.toggle_menu();
        }
    }

    /// Navigating anywhere closes the menu.
    pub fn navigate(&mut self, section: Option<Section>) {
        log::debug!("navigate to {}", section.map_or("top", Section::anchor));
        self.menu_open = false;
    }
}

/// Scroll offset that brings a section starting at `section_top` just below
/// the fixed header.
pub fn scroll_target(section_top: f32) -> f32 {
    scroll_target_with(section_top, HEADER_OFFSET)
}

pub fn scroll_target_with(section_top: f32, header_offset: f32) -> f32 {
    (section_top - header_offset).max(0.0)
}

pub fn is_narrow(width: f32) -> bool {
    width < NARROW_WIDTH
}

/// Ease-out cubic scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    start: f64,
    duration: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, start: f64) -> Self {
        Self { from, to, start, duration: SMOOTH_SCROLL_SECS }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at time `now`, with `true` once the animation has finished.
    pub fn sample(&self, now: f64) -> (f32, bool) {
        let elapsed = (now - self.start).max(0.0) as f32;
        let t = if self.duration > 0.0 { (elapsed / self.duration).min(1.0) } else { 1.0 };
        (self.from + (self.to - self.from) * ease_out_cubic(t), t >= 1.0)
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_anchor(s.anchor()), Some(s));
        }
        assert_eq!(Section::from_anchor("#models"), Some(Section::Models));
        assert_eq!(Section::from_anchor("footer"), None);
    }

    #[test]
    fn threshold_toggles_once_per_crossing() {
        let mut s = ScrollState::default();
        let flips: Vec<bool> = [0.0, 30.0, 50.0, 51.0, 80.0, 400.0, 60.0, 50.0, 10.0, 0.0, 51.0]
            .iter()
            .map(|o| s.observe(*o))
            .collect();
        assert_eq!(
            flips,
            vec![false, false, false, true, false, false, false, true, false, false, true]
        );
        assert!(s.scrolled());
    }

    #[test]
    fn navigation_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.navigate(Some(Section::Guidelines));
        assert!(!nav.menu_open());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
        nav.close_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn scroll_target_clamps_at_zero() {
        assert_eq!(scroll_target(640.0), 540.0);
        assert_eq!(scroll_target(60.0), 0.0);
        assert_eq!(scroll_target_with(300.0, 50.0), 250.0);
    }

    #[test]
    fn narrow_breakpoint() {
        assert!(is_narrow(767.0));
        assert!(!is_narrow(768.0));
    }

    #[test]
    fn smooth_scroll_eases_out() {
        let s = SmoothScroll::new(0.0, 100.0, 10.0);
        assert_eq!(s.sample(10.0), (0.0, false));
        let (mid, done) = s.sample(10.0 + SMOOTH_SCROLL_SECS as f64 / 2.0);
        assert!(!done);
        assert!(mid > 50.0, "ease-out is past halfway at half time: {mid}");
        assert_eq!(s.sample(20.0), (100.0, true));
    }
}
