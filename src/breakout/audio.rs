use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

/// Fire-and-forget sound trigger
pub trait SoundEffect {
    fn play(&self);
}

/// Used when no audio output device is available
pub struct Silence;

impl SoundEffect for Silence {
    fn play(&self) {}
}

pub struct RodioSoundEffect {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sound: Arc<[u8]>,
}

impl RodioSoundEffect {
    pub fn new(sound: Arc<[u8]>) -> anyhow::Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("no audio output device")?;
        Ok(Self {
            _stream: stream,
            handle,
            sound,
        })
    }
}

impl SoundEffect for RodioSoundEffect {
    fn play(&self) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        match Decoder::new(Cursor::new(Arc::clone(&self.sound))) {
            Ok(source) => {
                sink.append(source);
                sink.detach();
            }
            Err(e) => log::warn!("failed to decode sound: {e}"),
        }
    }
}

/// Reads a sound file and makes sure it can be decoded
pub fn load_sound(path: &Path) -> anyhow::Result<Arc<[u8]>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read sound '{}'", path.display()))?;
    let sound: Arc<[u8]> = bytes.into();
    Decoder::new(Cursor::new(Arc::clone(&sound)))
        .with_context(|| format!("unsupported sound format '{}'", path.display()))?;
    log::info!("loaded sound '{}' ({} bytes)", path.display(), sound.len());
    Ok(sound)
}

/// Sound for paddle hits; plays nothing when there is no audio device
pub fn paddle_hit_sound(path: &Path) -> anyhow::Result<Box<dyn SoundEffect>> {
    let sound = load_sound(path)?;
    match RodioSoundEffect::new(sound) {
        Ok(effect) => Ok(Box::new(effect)),
        Err(e) => {
            log::warn!("{e:#} - playing without sound");
            Ok(Box::new(Silence))
        }
    }
}
