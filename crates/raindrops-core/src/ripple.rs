//! Expanding rings and the pool that owns them.

use crate::config::RippleConfig;
use glam::Vec2;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Everything a renderer needs to stroke one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDraw {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub stroke_width: f32,
}

/// Draws unfilled rings; implemented by each frontend.
pub trait RingRenderer {
    fn draw_ring(&mut self, ring: &RingDraw);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub position: Vec2,
    pub radius: f32,
    pub escape_radius: f32,
}

impl Ripple {
    /// Grown past every canvas corner; safe to drop.
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.radius >= self.escape_radius
    }

    /// Lifetime progress in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.escape_radius <= 0.0 {
            return 1.0;
        }
        (self.radius / self.escape_radius).clamp(0.0, 1.0)
    }
}

/// Radius at which a ring centered on `position` has cleared the farthest
/// corner, including half the stroke.
pub fn escape_radius(position: Vec2, canvas: CanvasSize, stroke_width: f32) -> f32 {
    let dx = position.x.max(canvas.width - position.x);
    let dy = position.y.max(canvas.height - position.y);
    Vec2::new(dx, dy).length() + stroke_width * 0.5
}

pub struct RipplePool {
    config: RippleConfig,
    canvas: CanvasSize,
    ripples: Vec<Ripple>,
}

impl RipplePool {
    pub fn new(config: RippleConfig, canvas: CanvasSize) -> Self {
        Self {
            config,
            canvas,
            ripples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Add a ring at `position` with the birth radius.
    pub fn spawn(&mut self, position: Vec2) -> &Ripple {
        let ripple = Ripple {
            position,
            radius: self.config.start_radius,
            escape_radius: escape_radius(position, self.canvas, self.config.stroke_width),
        };
        log::trace!(
            "[ripples] spawn at ({:.0},{:.0}) escape={:.1}",
            position.x,
            position.y,
            ripple.escape_radius
        );
        self.ripples.push(ripple);
        &self.ripples[self.ripples.len() - 1]
    }

    /// Grow every ring by `growth_rate * dt_sec`, then drop the escaped ones.
    pub fn advance(&mut self, dt_sec: f32) {
        let growth = self.config.growth_rate_px_per_sec * dt_sec.max(0.0);
        for r in &mut self.ripples {
            r.radius += growth;
        }
        self.ripples.retain(|r| !r.is_gone());
    }

    pub fn render<R: RingRenderer + ?Sized>(&self, renderer: &mut R) {
        let c = &self.config;
        for r in &self.ripples {
            let p = r.progress();
            renderer.draw_ring(&RingDraw {
                x: r.position.x,
                y: r.position.y,
                diameter: r.radius * 2.0,
                hue: c.hue,
                saturation: c.saturation,
                lightness: c.light_min + (c.light_max - c.light_min) * p,
                alpha: (1.0 - p).powf(c.fade_curve_power),
                stroke_width: c.stroke_width,
            });
        }
    }

    /// Recompute escape radii against the new bounds; radii are kept.
    pub fn on_resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        let stroke = self.config.stroke_width;
        for r in &mut self.ripples {
            r.escape_radius = escape_radius(r.position, canvas, stroke);
        }
    }
}
