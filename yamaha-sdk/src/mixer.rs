//! Mixer facade and playback hook for media-player integrations
//!
//! [`Mixer`] exposes volume and mute with change notifications on the
//! channel handed out by [`Mixer::new`]. A successful set always sends a
//! [`MixerEvent`]; a read sends one only when the value differs from the
//! last one seen.
//! [`Frontend`] turns playback state transitions into `start_playback()`.

use std::sync::{mpsc, Arc, Mutex};

use crate::error::Result;
use crate::session::DeviceSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerEvent {
    VolumeChanged(u8),
    MuteChanged(bool),
}

#[derive(Debug, Default)]
struct Observed {
    volume: Option<u8>,
    muted: Option<bool>,
}

pub struct Mixer {
    session: Arc<DeviceSession>,
    observed: Mutex<Observed>,
    events: mpsc::Sender<MixerEvent>,
}

impl Mixer {
    pub fn new(session: Arc<DeviceSession>) -> (Self, mpsc::Receiver<MixerEvent>) {
        let (events, receiver) = mpsc::channel();
        let mixer = Self {
            session,
            observed: Mutex::new(Observed::default()),
            events,
        };
        (mixer, receiver)
    }

    /// Read volume and mute from the device, reporting any change
    pub fn get_volume(&self) -> Result<u8> {
        let (volume, muted) = self.session.get_volume_mute()?;
        self.observe_volume(volume);
        self.observe_mute(muted);
        Ok(volume)
    }

    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.session.set_volume(volume)?;
        self.lock_observed().volume = Some(volume);
        self.emit(MixerEvent::VolumeChanged(volume));
        Ok(())
    }

    /// Last observed mute flag, reading the device if none is known yet
    pub fn get_mute(&self) -> Result<bool> {
        if let Some(muted) = self.lock_observed().muted {
            return Ok(muted);
        }

        let (volume, muted) = self.session.get_volume_mute()?;
        self.observe_volume(volume);
        self.observe_mute(muted);
        Ok(muted)
    }

    pub fn set_mute(&self, muted: bool) -> Result<()> {
        self.session.set_mute(muted)?;
        self.lock_observed().muted = Some(muted);
        self.emit(MixerEvent::MuteChanged(muted));
        Ok(())
    }

    fn observe_volume(&self, volume: u8) {
        let changed = {
            let mut observed = self.lock_observed();
            let changed = observed.volume != Some(volume);
            observed.volume = Some(volume);
            changed
        };
        if changed {
            self.emit(MixerEvent::VolumeChanged(volume));
        }
    }

    fn observe_mute(&self, muted: bool) {
        let changed = {
            let mut observed = self.lock_observed();
            let changed = observed.muted != Some(muted);
            observed.muted = Some(muted);
            changed
        };
        if changed {
            self.emit(MixerEvent::MuteChanged(muted));
        }
    }

    fn emit(&self, event: MixerEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(?event, "Mixer event receiver dropped");
        }
    }

    fn lock_observed(&self) -> std::sync::MutexGuard<'_, Observed> {
        self.observed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Playback state as reported by the media player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Restores the receiver whenever playback begins
pub struct Frontend {
    session: Arc<DeviceSession>,
}

impl Frontend {
    pub fn new(session: Arc<DeviceSession>) -> Self {
        Self { session }
    }

    pub fn playback_state_changed(&self, old: PlaybackState, new: PlaybackState) -> Result<()> {
        tracing::debug!(?old, ?new, "Playback state changed");
        if new == PlaybackState::Playing {
            self.session.start_playback()?;
        }
        Ok(())
    }
}
