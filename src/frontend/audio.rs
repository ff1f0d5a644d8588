use log::warn;
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Eat,
    LevelUp,
    GameOver,
}

/// Generated tones. Any that fail to load stay silent.
pub struct SoundEffects {
    eat: Option<Sound>,
    level_up: Option<Sound>,
    game_over: Option<Sound>,
    volume: f32,
}

impl SoundEffects {
    pub async fn load(volume: f32) -> Self {
        Self {
            eat: tone("eat", 880.0, 0.08, 0.6).await,
            level_up: tone("level up", 1320.0, 0.15, 0.5).await,
            game_over: tone("game over", 110.0, 0.25, 0.7).await,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn muted() -> Self {
        Self {
            eat: None,
            level_up: None,
            game_over: None,
            volume: 0.0,
        }
    }

    pub fn play(&self, effect: Effect) {
        let (sound, gain) = match effect {
            Effect::Eat => (&self.eat, 0.35),
            Effect::LevelUp => (&self.level_up, 0.4),
            Effect::GameOver => (&self.game_over, 0.6),
        };
        if let Some(sound) = sound {
            audio::play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: gain * self.volume,
                },
            );
        }
    }
}

async fn tone(name: &str, frequency_hz: f32, duration_seconds: f32, volume: f32) -> Option<Sound> {
    let bytes = generate_wav_sine(frequency_hz, duration_seconds, volume);
    match load_sound_from_bytes(&bytes).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("Sound {:?} unavailable, continuing muted: {:?}", name, e);
            None
        }
    }
}

/// PCM16 mono WAV holding a sine tone.
pub fn generate_wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples: u32 = (duration_seconds * sample_rate as f32) as u32;
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2;
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let sample = (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_layout() {
        let wav = generate_wav_sine(440.0, 0.5, 0.5);
        let samples = 22050;
        assert_eq!(wav.len(), 44 + samples * 2);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size as usize, samples * 2);
    }

    #[test]
    fn test_silent_volume_is_flat() {
        let wav = generate_wav_sine(440.0, 0.01, 0.0);
        assert!(wav[44..].iter().all(|b| *b == 0));
    }
}
