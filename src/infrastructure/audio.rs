use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// 8-bit style square-wave jingles for UI feedback.
///
/// Audio is cosmetic: a browser without an `AudioContext`, or one that
/// refuses to start it, degrades to silence rather than an error.
pub struct SoundEffects {
    context: Option<AudioContext>,
}

impl SoundEffects {
    pub fn new() -> Self {
        match AudioContext::new() {
            Ok(context) => Self { context: Some(context) },
            Err(error) => {
                log_warn!(
                    LogComponent::Infrastructure("Audio"),
                    "AudioContext unavailable, running silent: {error:?}"
                );
                Self { context: None }
            }
        }
    }

    /// Browsers keep a fresh context suspended until a user gesture
    /// lands; call this from input handlers.
    pub fn resume_if_suspended(&self) {
        if let Some(context) = &self.context {
            if context.state() == AudioContextState::Suspended {
                let _ = context.resume();
            }
        }
    }

    /// Two quick rising blips.
    pub fn play_button(&self) {
        self.play_tone(440.0, 0.1);
        self.play_tone_after(50, 880.0, 0.1);
    }

    /// Low descending buzz.
    pub fn play_error(&self) {
        self.play_tone(150.0, 0.2);
        self.play_tone_after(100, 100.0, 0.3);
    }

    /// C5-E5-G5 arpeggio.
    pub fn play_success(&self) {
        self.play_tone(523.0, 0.1);
        self.play_tone_after(100, 659.0, 0.1);
        self.play_tone_after(200, 784.0, 0.15);
    }

    fn play_tone(&self, frequency: f32, duration: f64) {
        if let Some(context) = &self.context {
            if let Err(error) = schedule_tone(context, frequency, duration) {
                log_debug!(LogComponent::Infrastructure("Audio"), "tone dropped: {error:?}");
            }
        }
    }

    fn play_tone_after(&self, delay_ms: u32, frequency: f32, duration: f64) {
        let context = self.context.clone();
        Timeout::new(delay_ms, move || {
            if let Some(context) = &context {
                if let Err(error) = schedule_tone(context, frequency, duration) {
                    log_debug!(LogComponent::Infrastructure("Audio"), "tone dropped: {error:?}");
                }
            }
        })
        .forget();
    }
}

impl Default for SoundEffects {
    fn default() -> Self {
        Self::new()
    }
}

/// One oscillator, gain ramped down exponentially so the tone decays
/// instead of clicking off.
fn schedule_tone(context: &AudioContext, frequency: f32, duration: f64) -> Result<(), JsValue> {
    let oscillator: OscillatorNode = context.create_oscillator()?;
    let gain: GainNode = context.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    oscillator.frequency().set_value(frequency);
    oscillator.set_type(OscillatorType::Square);

    let now = context.current_time();
    gain.gain().set_value_at_time(0.1, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.01, now + duration)?;

    oscillator.start()?;
    oscillator.stop_with_when(now + duration)?;
    Ok(())
}
