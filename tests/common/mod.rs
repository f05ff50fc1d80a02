// Recording doubles for the rendering and audio collaborators.

#![allow(dead_code)]
use raindrops_core::{AudioSink, RingDraw, RingRenderer, TextDraw, TextRenderer};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnText {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub alpha: f32,
    pub font_size: f32,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub rings: Vec<RingDraw>,
    pub texts: Vec<DrawnText>,
}

impl RingRenderer for RecordingRenderer {
    fn draw_ring(&mut self, ring: &RingDraw) {
        self.rings.push(*ring);
    }
}

impl TextRenderer for RecordingRenderer {
    fn draw_text(&mut self, text: &TextDraw<'_>) {
        self.texts.push(DrawnText {
            x: text.x,
            y: text.y,
            content: text.content.to_string(),
            alpha: text.alpha,
            font_size: text.font_size,
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCall {
    Play {
        frequency_hz: f32,
        velocity: f32,
        duration_sec: f32,
    },
    Glide {
        frequency_hz: f32,
        glide_sec: f32,
    },
}

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<AudioCall>,
}

impl AudioSink for RecordingSink {
    fn play_note(&mut self, frequency_hz: f32, velocity: f32, duration_sec: f32) {
        self.calls.push(AudioCall::Play {
            frequency_hz,
            velocity,
            duration_sec,
        });
    }

    fn glide_to(&mut self, frequency_hz: f32, glide_sec: f32) {
        self.calls.push(AudioCall::Glide {
            frequency_hz,
            glide_sec,
        });
    }
}
