//! Play / pause state of the animation, independent of Bevy
//!
//! Playing always resumes from the current frame. When the last frame is
//! reached playback stops, unless looping is enabled; pressing play while
//! parked on the last frame starts over from frame 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
}

impl PlaybackAction {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackAction::Play => "Play",
            PlaybackAction::Pause => "Pause",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Playback {
    frame: usize,
    n_frames: usize,
    playing: bool,
    looping: bool,
    started: bool, // set once the user first plays or steps
}

impl Playback {
    /// Starts paused on frame 0
    pub fn new(n_frames: usize, looping: bool) -> Self {
        Self {
            frame: 0,
            n_frames,
            playing: false,
            looping,
            started: false,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_at_end(&self) -> bool {
        self.frame + 1 >= self.n_frames
    }

    pub fn apply(&mut self, action: PlaybackAction) {
        match action {
            PlaybackAction::Play => self.play(),
            PlaybackAction::Pause => self.pause(),
        }
    }

    pub fn play(&mut self) {
        if self.n_frames == 0 {
            return;
        }
        if self.is_at_end() {
            self.frame = 0;
        }
        self.playing = true;
        self.started = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Move `steps` frames forward while playing.
    /// Returns `true` if playback stopped on the last frame during this call.
    pub fn advance(&mut self, steps: u32) -> bool {
        if !self.playing || self.n_frames == 0 {
            return false;
        }

        for _ in 0..steps {
            if !self.is_at_end() {
                self.frame += 1;
            } else if self.looping {
                self.frame = 0;
            } else {
                self.playing = false;
                return true;
            }
        }

        if self.is_at_end() && !self.looping {
            self.playing = false;
            return true;
        }
        false
    }

    /// Manual stepping, only while paused; clamps at both ends
    pub fn step(&mut self, delta: isize) {
        if self.playing || self.n_frames == 0 {
            return;
        }
        self.started = true;
        let last = self.n_frames as isize - 1;
        self.frame = (self.frame as isize + delta).clamp(0, last) as usize;
    }
}
