//! Brand palette shared by the painter, the SVG writer and the HTML export.

/// RGBA in 0..1, the same convention the scene primitives use.
pub type Rgba = [f32; 4];

pub const BLUE: Rgba = [0.050980392, 0.137254902, 0.17254902, 1.0];
pub const ORANGE: Rgba = [0.945098039, 0.549019608, 0.133333333, 1.0];
pub const GREEN: Rgba = [0.529411765, 0.796078431, 0.8, 1.0];
pub const CREAM: Rgba = [0.976470588, 0.97254902, 0.956862745, 1.0];
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const RED_SOFT: Rgba = [0.996078431, 0.949019608, 0.949019608, 1.0];
pub const RED: Rgba = [0.937254902, 0.266666667, 0.266666667, 1.0];
pub const BLUE_SOFT: Rgba = [0.937254902, 0.964705882, 1.0, 1.0];

/// `#rrggbb` for SVG / CSS output.
pub fn hex(c: Rgba) -> String {
    let [r, g, b] = to_u8(c);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

pub fn to_u8(c: Rgba) -> [u8; 3] {
    [
        (c[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[2].clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

/// Multiply the RGB channels by `k` (lighting), alpha untouched.
pub fn shade(c: Rgba, k: f32) -> Rgba {
    [
        (c[0] * k).clamp(0.0, 1.0),
        (c[1] * k).clamp(0.0, 1.0),
        (c[2] * k).clamp(0.0, 1.0),
        c[3],
    ]
}

pub fn mix(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

pub fn to_color32(c: Rgba) -> egui::Color32 {
    let [r, g, b] = to_u8(c);
    let a = (c[3].clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// `c` with alpha scaled by `opacity`.
pub fn with_opacity(c: Rgba, opacity: f32) -> Rgba {
    [c[0], c[1], c[2], c[3] * opacity.clamp(0.0, 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_hex_round_trips() {
        assert_eq!(hex(BLUE), "#0D232C");
        assert_eq!(hex(ORANGE), "#F18C22");
        assert_eq!(hex(GREEN), "#87CBCC");
    }

    #[test]
    fn shade_clamps() {
        assert_eq!(shade(WHITE, 2.0), WHITE);
        assert_eq!(shade(WHITE, 0.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn color32_conversion() {
        let c = to_color32([1.0, 0.0, 0.5, 1.0]);
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
        assert_eq!(c.b(), 128);
    }
}
