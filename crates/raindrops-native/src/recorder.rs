use raindrops_core::{AudioSink, RingDraw, RingRenderer, TextDraw, TextRenderer};

/// Stand-in for a real canvas and synth: tallies every call it receives.
#[derive(Default, Debug)]
pub struct Recorder {
    pub rings_drawn: u64,
    pub texts_drawn: u64,
    pub notes_played: u64,
    pub glides: u64,
    pub max_alpha_seen: f32,
    pub lowest_note_hz: Option<f32>,
    pub highest_note_hz: Option<f32>,
}

impl RingRenderer for Recorder {
    fn draw_ring(&mut self, ring: &RingDraw) {
        self.rings_drawn += 1;
        self.max_alpha_seen = self.max_alpha_seen.max(ring.alpha);
    }
}

impl TextRenderer for Recorder {
    fn draw_text(&mut self, _text: &TextDraw<'_>) {
        self.texts_drawn += 1;
    }
}

impl AudioSink for Recorder {
    fn play_note(&mut self, frequency_hz: f32, _velocity: f32, _duration_sec: f32) {
        self.notes_played += 1;
        self.lowest_note_hz = Some(self.lowest_note_hz.map_or(frequency_hz, |f| f.min(frequency_hz)));
        self.highest_note_hz = Some(self.highest_note_hz.map_or(frequency_hz, |f| f.max(frequency_hz)));
    }

    fn glide_to(&mut self, _frequency_hz: f32, _glide_sec: f32) {
        self.glides += 1;
    }
}
