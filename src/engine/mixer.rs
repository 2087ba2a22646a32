use crate::{
    config::AudioConfig,
    dsp::gain::db_to_gain,
    engine::{
        message::{EngineMessage, MessageReceiver},
        strip::{DroneStrip, EventStrip},
    },
    presence::location::Zone,
    sonify::trigger::VoiceId,
    MAX_BLOCK_SIZE,
};

/*
Mixer
=====

Everything that runs on the audio thread. Owns one strip per event voice
(seven: appearance ×3 wings, displacement, disappearance ×3 wings) and one
drone strip per floor, and sums them into a stereo bus.

  EngineMessage ──► drain at block start ──► strips ──► L/R bus ──► device

Control messages are applied at block boundaries; an event's note-off is
sample-accurate from there. Output is interleaved for whatever channel
count the device asks for: stereo goes to the first two channels (extra
channels get silence), mono gets the average of L and R.

Nothing here allocates after construction.
*/

/// Trim on event voices so overlapping notes leave headroom for the drones.
const EVENT_GAIN: f32 = 0.5;

pub struct Mixer<R: MessageReceiver> {
    rx: R,
    sample_rate: f32,
    events: Vec<EventStrip>,
    drones: Vec<DroneStrip>,
    mono: Vec<f32>,
    pan: Vec<f32>,
    left: Vec<f32>,
    right: Vec<f32>,
    frame_counter: u64,
}

impl<R: MessageReceiver> Mixer<R> {
    /// `initial_level_db` is where every drone starts before the first
    /// level update arrives (normally the ambient base level).
    pub fn new(rx: R, sample_rate: f32, audio: &AudioConfig, initial_level_db: f32) -> Self {
        let initial_gain = db_to_gain(initial_level_db);
        Self {
            rx,
            sample_rate,
            events: VoiceId::ALL
                .iter()
                .map(|&voice| EventStrip::new(voice, sample_rate))
                .collect(),
            drones: Zone::ALL
                .iter()
                .map(|&zone| DroneStrip::new(zone, sample_rate, initial_gain, audio.level_smoothing))
                .collect(),
            mono: vec![0.0; MAX_BLOCK_SIZE],
            pan: vec![0.0; MAX_BLOCK_SIZE],
            left: vec![0.0; MAX_BLOCK_SIZE],
            right: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
        }
    }

    fn process_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                EngineMessage::Trigger {
                    voice,
                    note,
                    duration_secs,
                } => self.events[voice.slot()].start(note, duration_secs),
                EngineMessage::SetLevel { zone, level_db } => {
                    if level_db.is_finite() {
                        self.drones[zone.index()].set_gain(db_to_gain(level_db));
                    }
                }
            }
        }
    }

    /// Render `frames` (≤ MAX_BLOCK_SIZE) into the internal L/R bus.
    fn render_bus(&mut self, frames: usize) {
        self.process_messages();

        let left = &mut self.left[..frames];
        let right = &mut self.right[..frames];
        let mono = &mut self.mono[..frames];
        let pan = &mut self.pan[..frames];
        left.fill(0.0);
        right.fill(0.0);

        for strip in &mut self.events {
            if !strip.render(mono) {
                continue;
            }
            let (gl, gr) = strip.gains();
            for ((l, r), s) in left.iter_mut().zip(right.iter_mut()).zip(mono.iter()) {
                *l += s * gl * EVENT_GAIN;
                *r += s * gr * EVENT_GAIN;
            }
        }

        for drone in &mut self.drones {
            drone.render(mono, pan);
            for (((l, r), s), p) in left.iter_mut().zip(right.iter_mut()).zip(mono.iter()).zip(pan.iter()) {
                let (gl, gr) = DroneStrip::pan_at(*p);
                *l += s * gl;
                *r += s * gr;
            }
        }

        self.frame_counter += frames as u64;
    }

    /// Render into separate left and right buffers of equal length.
    pub fn render_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        let frames = left.len().min(right.len());
        let mut done = 0;
        while done < frames {
            let n = (frames - done).min(MAX_BLOCK_SIZE);
            self.render_bus(n);
            left[done..done + n].copy_from_slice(&self.left[..n]);
            right[done..done + n].copy_from_slice(&self.right[..n]);
            done += n;
        }
    }

    /// Render into an interleaved device buffer with `channels` channels.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }
        for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            let frames = chunk.len() / channels;
            self.render_bus(frames);

            for (i, frame) in chunk.chunks_exact_mut(channels).enumerate() {
                let (l, r) = (self.left[i], self.right[i]);
                if channels == 1 {
                    frame[0] = (0.5 * (l + r)).clamp(-1.0, 1.0);
                } else {
                    frame[0] = l.clamp(-1.0, 1.0);
                    frame[1] = r.clamp(-1.0, 1.0);
                    frame[2..].fill(0.0);
                }
            }
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Frames rendered since construction.
    pub fn frames(&self) -> u64 {
        self.frame_counter
    }

    /// Event voices currently sounding (held or in their tail).
    pub fn sounding(&self) -> impl Iterator<Item = VoiceId> + '_ {
        self.events.iter().filter(|s| s.is_sounding()).map(|s| s.voice())
    }

    /// Current (smoothed) linear gain of a floor's drone.
    pub fn drone_gain(&self, zone: Zone) -> f32 {
        self.drones[zone.index()].gain()
    }

    /// Linear gain the floor's drone is ramping toward.
    pub fn drone_target(&self, zone: Zone) -> f32 {
        self.drones[zone.index()].target_gain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presence::location::Wing, sonify::notes::C4};
    use approx::assert_relative_eq;
    use std::collections::VecDeque;

    const SR: f32 = 48_000.0;

    fn mixer() -> Mixer<VecDeque<EngineMessage>> {
        let audio = AudioConfig {
            queue_size: 16,
            level_smoothing: 0.0,
        };
        Mixer::new(VecDeque::new(), SR, &audio, -18.0)
    }

    fn rms(buf: &[f32]) -> f32 {
        (buf.iter().map(|s| s * s).sum::<f32>() / buf.len() as f32).sqrt()
    }

    #[test]
    fn drones_play_from_the_start() {
        let mut mixer = mixer();
        let mut data = vec![0.0; 4096 * 2];
        mixer.render_interleaved(&mut data, 2);

        assert!(rms(&data) > 0.0);
        assert_eq!(mixer.sounding().count(), 0);
        assert_eq!(mixer.frames(), 4096);
    }

    #[test]
    fn set_level_applies_at_next_block() {
        let mut mixer = mixer();
        mixer.rx.push_back(EngineMessage::SetLevel {
            zone: Zone::Second,
            level_db: -6.0,
        });
        let mut data = vec![0.0; 256];
        mixer.render_interleaved(&mut data, 2);

        assert_relative_eq!(mixer.drone_gain(Zone::Second), db_to_gain(-6.0), epsilon = 1e-6);
        assert_relative_eq!(mixer.drone_gain(Zone::Cafe), db_to_gain(-18.0), epsilon = 1e-6);
    }

    #[test]
    fn non_finite_levels_are_ignored() {
        let mut mixer = mixer();
        mixer.rx.push_back(EngineMessage::SetLevel {
            zone: Zone::Third,
            level_db: f32::NAN,
        });
        let mut data = vec![0.0; 256];
        mixer.render_interleaved(&mut data, 2);
        assert_relative_eq!(mixer.drone_target(Zone::Third), db_to_gain(-18.0), epsilon = 1e-6);
    }

    #[test]
    fn west_appearance_lands_on_the_left() {
        // Silence the drones so only the event voice is heard
        let mut mixer = mixer();
        for zone in Zone::ALL {
            mixer.rx.push_back(EngineMessage::SetLevel { zone, level_db: -200.0 });
        }
        mixer.rx.push_back(EngineMessage::Trigger {
            voice: VoiceId::Appearance(Wing::West),
            note: C4,
            duration_secs: 0.125,
        });

        let mut left = vec![0.0; 4800];
        let mut right = vec![0.0; 4800];
        mixer.render_stereo(&mut left, &mut right);

        assert!(rms(&left) > 0.01);
        assert!(rms(&right) < 1e-4);
        assert_eq!(mixer.sounding().collect::<Vec<_>>(), vec![VoiceId::Appearance(Wing::West)]);
    }

    #[test]
    fn mono_device_gets_the_average() {
        let mut a = mixer();
        let mut b = mixer();
        let mut mono = vec![0.0; 512];
        let mut left = vec![0.0; 512];
        let mut right = vec![0.0; 512];
        a.render_interleaved(&mut mono, 1);
        b.render_stereo(&mut left, &mut right);

        for i in 0..512 {
            assert_relative_eq!(mono[i], 0.5 * (left[i] + right[i]), epsilon = 1e-6);
        }
    }

    #[test]
    fn extra_channels_are_silent() {
        let mut mixer = mixer();
        let mut data = vec![1.0; 4 * 300];
        mixer.render_interleaved(&mut data, 4);
        for frame in data.chunks_exact(4) {
            assert_eq!(frame[2], 0.0);
            assert_eq!(frame[3], 0.0);
        }
    }

    #[test]
    fn large_buffers_are_split_into_blocks() {
        let mut mixer = mixer();
        let mut data = vec![0.0; (MAX_BLOCK_SIZE * 3 + 17) * 2];
        mixer.render_interleaved(&mut data, 2);
        assert_eq!(mixer.frames(), (MAX_BLOCK_SIZE * 3 + 17) as u64);
        assert!(data.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
    }
}
