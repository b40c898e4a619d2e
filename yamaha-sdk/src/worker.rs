//! Background worker thread for one receiver session
//!
//! The worker owns the [`Talker`] and drains the command channel strictly in
//! arrival order, so at most one request is ever in flight against the
//! receiver and the cached state is only touched from this thread.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use control_client::Transport;
use yamaha_api::PowerState;

use crate::error::{Result, SessionError};
use crate::state::DeviceState;
use crate::talker::Talker;

/// Reply channel for a single command
pub(crate) type Reply<T> = mpsc::Sender<Result<T>>;

/// Commands sent from the sync DeviceSession to the background worker
pub(crate) enum Command {
    Start { reply: Reply<String> },
    GetVolumeMute { reply: Reply<(u8, bool)> },
    SetVolume { percent: u8, reply: Reply<()> },
    SetMute { muted: bool, reply: Reply<()> },
    GetPower { reply: Reply<PowerState> },
    StartPlayback { reply: Reply<()> },
    StopPlayback { reply: Reply<()> },
    Snapshot { reply: mpsc::Sender<DeviceState> },
    Shutdown,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Start { .. } => "start",
            Command::GetVolumeMute { .. } => "get_volume_mute",
            Command::SetVolume { .. } => "set_volume",
            Command::SetMute { .. } => "set_mute",
            Command::GetPower { .. } => "get_power",
            Command::StartPlayback { .. } => "start_playback",
            Command::StopPlayback { .. } => "stop_playback",
            Command::Snapshot { .. } => "snapshot",
            Command::Shutdown => "shutdown",
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SetVolume { percent, .. } => {
                f.debug_struct("SetVolume").field("percent", percent).finish()
            }
            Command::SetMute { muted, .. } => f.debug_struct("SetMute").field("muted", muted).finish(),
            other => f.write_str(other.name()),
        }
    }
}

/// Spawns the worker thread for `talker`
pub(crate) fn spawn_session_worker<T: Transport>(
    talker: Talker<T>,
    command_rx: mpsc::Receiver<Command>,
) -> Result<JoinHandle<()>> {
    let name = format!("yamaha-session-{}", talker.host());

    thread::Builder::new()
        .name(name)
        .spawn(move || run_command_loop(talker, command_rx))
        .map_err(|e| SessionError::WorkerSpawn(e.to_string()))
}

fn run_command_loop<T: Transport>(mut talker: Talker<T>, command_rx: mpsc::Receiver<Command>) {
    tracing::info!(host = %talker.host(), "Session worker started");

    while let Ok(command) = command_rx.recv() {
        tracing::trace!(host = %talker.host(), command = command.name(), "Processing command");

        // A send error only means the caller stopped waiting for the result
        match command {
            Command::Start { reply } => {
                let _ = reply.send(talker.start());
            }
            Command::GetVolumeMute { reply } => {
                let _ = reply.send(talker.get_volume_mute());
            }
            Command::SetVolume { percent, reply } => {
                let _ = reply.send(talker.set_volume(percent));
            }
            Command::SetMute { muted, reply } => {
                let _ = reply.send(talker.set_mute(muted));
            }
            Command::GetPower { reply } => {
                let _ = reply.send(talker.power_state());
            }
            Command::StartPlayback { reply } => {
                let _ = reply.send(talker.start_playback());
            }
            Command::StopPlayback { reply } => {
                let _ = reply.send(talker.stop_playback());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(talker.state().clone());
            }
            Command::Shutdown => {
                tracing::info!(host = %talker.host(), "Session worker received shutdown command");
                break;
            }
        }
    }

    tracing::info!(host = %talker.host(), "Session worker shut down");
}
