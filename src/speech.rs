//! English speech playback using `piper-rs` with caching in `.cache`.
//! Audio is generated per sentence and stored as WAV for reuse.

use anyhow::{Context, Result};
use piper_rs::from_config_path;
use piper_rs::synth::{AudioOutputConfig, PiperSpeechSynthesizer};
use rodio::{Decoder, OutputStream, Sink};
use sha2::{Digest, Sha256};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone)]
pub struct SpeechEngine {
    model_path: PathBuf,
}

impl SpeechEngine {
    pub fn new(model_path: PathBuf, espeak_path: PathBuf) -> Result<Self> {
        let espeak_path = sanitize_espeak_root(espeak_path);
        if env::var_os("PIPER_ESPEAKNG_DATA_DIRECTORY").is_none() {
            // Safe because we set a deterministic value early in process startup.
            unsafe {
                env::set_var("PIPER_ESPEAKNG_DATA_DIRECTORY", &espeak_path);
            }
        }
        info!(
            model = %model_path.display(),
            espeak_root = %espeak_path.display(),
            "Initializing speech engine"
        );
        Ok(Self { model_path })
    }

    /// Synthesize one sentence (reusing a cached take when available) and
    /// start playback; returns a handle to control it.
    pub fn speak(
        &self,
        cache_root: &Path,
        sentence: &str,
        speed: f32,
        volume: f32,
    ) -> Result<SpeechPlayback> {
        let path = cache_path(cache_root, &self.model_path, sentence, speed);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Creating speech cache directory")?;
            }
            self.synthesize(&path, sentence, speed)?;
        }

        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        let reader = BufReader::new(File::open(&path)?);
        let source = Decoder::new(reader)?;
        sink.set_volume(volume);
        sink.append(source);
        sink.play();
        debug!(path = %path.display(), volume, "Started speech playback");
        Ok(SpeechPlayback { _stream, sink })
    }

    fn synthesize(&self, path: &Path, sentence: &str, speed: f32) -> Result<()> {
        let config_path = resolve_piper_config(&self.model_path);
        if !config_path.exists() {
            anyhow::bail!(
                "Piper config not found at {} (expected from {})",
                config_path.display(),
                self.model_path.display()
            );
        }
        let model = from_config_path(&config_path).context("Loading Piper model")?;
        let piper = PiperSpeechSynthesizer::new(model).context("Preparing Piper synthesizer")?;

        debug!(
            path = %path.display(),
            speed,
            chars = sentence.len(),
            "Synthesizing sentence with Piper"
        );
        let output_config = if (speed - 1.0).abs() <= f32::EPSILON {
            None
        } else {
            Some(AudioOutputConfig {
                rate: Some(speed_to_rate_percent(speed)),
                volume: None,
                pitch: None,
                appended_silence_ms: None,
            })
        };
        piper
            .synthesize_to_file(path, sentence.to_string(), output_config)
            .context("Synthesizing audio")?;
        Ok(())
    }
}

pub struct SpeechPlayback {
    _stream: OutputStream,
    sink: Sink,
}

impl SpeechPlayback {
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn stop(self) {
        self.sink.stop();
        // stream dropped automatically
    }
}

fn cache_path(base: &Path, model_path: &Path, sentence: &str, speed: f32) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(model_path.as_os_str().to_string_lossy().as_bytes());
    hasher.update(sentence.as_bytes());
    hasher.update(speed.to_le_bytes());
    let hash = format!("{:x}", hasher.finalize());
    base.join(format!("tts-{hash}.wav"))
}

/// Piper expects the parent directory that contains `espeak-ng-data/phonindex`.
/// Users often point directly at `.../espeak-ng-data`; trim that to avoid
/// duplicated segments like `/espeak-ng-data/espeak-ng-data/phonindex`.
fn sanitize_espeak_root(path: PathBuf) -> PathBuf {
    if path
        .file_name()
        .map(|n| n == "espeak-ng-data")
        .unwrap_or(false)
    {
        if let Some(parent) = path.parent() {
            debug!(
                original = %path.display(),
                sanitized = %parent.display(),
                "Trimming espeak-ng-data suffix"
            );
            return parent.to_path_buf();
        }
    }
    path
}

fn resolve_piper_config(model_path: &Path) -> PathBuf {
    if model_path
        .extension()
        .map(|ext| ext == "onnx")
        .unwrap_or(false)
    {
        return model_path.with_extension("onnx.json");
    }
    model_path.to_path_buf()
}

fn speed_to_rate_percent(speed: f32) -> u8 {
    let clamped = speed.clamp(0.5, 5.5);
    let percent = ((clamped - 0.5) / 5.0) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
