//! Centered hint text that fades out after the first interaction.

use crate::config::HintConfig;
use crate::ripple::CanvasSize;

#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw<'a> {
    pub x: f32,
    pub y: f32,
    pub content: &'a str,
    pub alpha: f32,
    pub font_size: f32,
}

/// Draws centered text; implemented by each frontend.
pub trait TextRenderer {
    fn draw_text(&mut self, text: &TextDraw<'_>);
}

pub struct HintOverlay {
    config: HintConfig,
    opacity: f32,
    fading: bool,
}

impl HintOverlay {
    pub fn new(config: HintConfig) -> Self {
        Self {
            config,
            opacity: 1.0,
            fading: false,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// Start fading. Once started the fade only moves toward zero.
    pub fn trigger_fade_out(&mut self) {
        if !self.fading {
            log::debug!("[hint] fading out over {:.2}s", self.config.fade_sec);
        }
        self.fading = true;
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if self.fading && self.opacity > 0.0 {
            self.opacity = (self.opacity - dt_sec.max(0.0) / self.config.fade_sec).max(0.0);
        }
    }

    pub fn render<R: TextRenderer + ?Sized>(&self, renderer: &mut R, canvas: CanvasSize) {
        if self.opacity <= 0.0 {
            return;
        }
        let center = canvas.center();
        for line in &self.config.lines {
            renderer.draw_text(&TextDraw {
                x: center.x,
                y: center.y + line.dy,
                content: &line.text,
                alpha: self.opacity,
                font_size: line.font_size,
            });
        }
    }
}
