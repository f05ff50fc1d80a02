use crate::color::{font_css, hsl_css, hsla_css};
use crate::constants::{HINT_FONT_FAMILY, HINT_TEXT_HSL};
use raindrops_core::constants::BACKGROUND_HSL;
use raindrops_core::{CanvasSize, RingDraw, RingRenderer, TextDraw, TextRenderer};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the ring and text collaborators.
///
/// Drawing happens in CSS pixels; the context transform maps them onto the
/// devicePixelRatio-scaled backing store.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    background: String,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            background: hsl_css(BACKGROUND_HSL),
        })
    }

    /// Reset the transform for `dpr` and paint the background.
    pub fn begin_frame(&self, size: CanvasSize, dpr: f64) {
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.set_fill_style_str(&self.background);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }
}

impl RingRenderer for CanvasRenderer {
    fn draw_ring(&mut self, ring: &RingDraw) {
        if ring.alpha <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&hsla_css(
            ring.hue,
            ring.saturation,
            ring.lightness,
            ring.alpha,
        ));
        self.ctx.set_line_width(ring.stroke_width as f64);
        let radius = (ring.diameter * 0.5).max(0.0) as f64;
        if let Err(e) = self.ctx.arc(
            ring.x as f64,
            ring.y as f64,
            radius,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::error!("arc error: {:?}", e);
            return;
        }
        self.ctx.stroke();
    }
}

impl TextRenderer for CanvasRenderer {
    fn draw_text(&mut self, text: &TextDraw<'_>) {
        let [h, s, l] = HINT_TEXT_HSL;
        self.ctx.set_fill_style_str(&hsla_css(h, s, l, text.alpha));
        self.ctx.set_font(&font_css(text.font_size, HINT_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        _ = self
            .ctx
            .fill_text(text.content, text.x as f64, text.y as f64);
    }
}
