// CSS string builders for the 2D canvas context.

/// `hsla()` color with hue in degrees, saturation/lightness in percent and alpha in 0..1.
pub fn hsla_css(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!(
        "hsla({:.0}, {:.1}%, {:.1}%, {:.3})",
        hue,
        saturation.clamp(0.0, 100.0),
        lightness.clamp(0.0, 100.0),
        alpha.clamp(0.0, 1.0)
    )
}

/// Opaque `hsl()` color.
pub fn hsl_css(hsl: [f32; 3]) -> String {
    format!(
        "hsl({:.0}, {:.1}%, {:.1}%)",
        hsl[0],
        hsl[1].clamp(0.0, 100.0),
        hsl[2].clamp(0.0, 100.0)
    )
}

pub fn font_css(size_px: f32, family: &str) -> String {
    format!("{:.0}px {}", size_px.max(1.0), family)
}
