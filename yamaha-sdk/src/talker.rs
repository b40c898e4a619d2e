//! Command sequencing for one receiver
//!
//! The talker owns the API client and the cached [`DeviceState`]. It is
//! plain synchronous code with no threading of its own; the session worker
//! owns exactly one talker and feeds it commands one at a time.

use control_client::Transport;
use yamaha_api::operations::{
    GetBasicStatusOperation, GetModelOperation, GetPowerOperation, SelectInputOperation,
    SetMuteOperation, SetPartyModeOperation, SetPowerOperation, SetVolumeOperation,
};
use yamaha_api::{PowerState, ReceiverClient, VolumeScale};

use crate::config::ReceiverConfig;
use crate::error::{Result, SessionError};
use crate::state::DeviceState;

pub struct Talker<T: Transport> {
    host: String,
    client: ReceiverClient<T>,
    scale: VolumeScale,
    state: DeviceState,
}

impl<T: Transport> Talker<T> {
    pub fn new(config: &ReceiverConfig, transport: T) -> Self {
        Self {
            host: config.host.clone(),
            client: ReceiverClient::with_transport(transport),
            scale: config.volume_scale(),
            state: DeviceState::from_config(config),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Query and store the device model
    ///
    /// Once a model is stored this returns it without contacting the device.
    pub fn start(&mut self) -> Result<String> {
        if let Some(model) = &self.state.model {
            return Ok(model.clone());
        }

        tracing::info!(host = %self.host, "Get device model");
        let info = self.client.execute(&self.host, &GetModelOperation)?;
        tracing::info!(host = %self.host, model = %info.model_name, "Found device model");

        self.state.model = Some(info.model_name.clone());
        Ok(info.model_name)
    }

    pub fn get_volume_mute(&mut self) -> Result<(u8, bool)> {
        self.ensure_started()?;

        let status = self.client.execute(&self.host, &GetBasicStatusOperation)?;
        self.state.native_volume = Some(status.native_volume);
        self.state.muted = Some(status.muted);

        Ok((self.scale.native_to_percent(status.native_volume), status.muted))
    }

    pub fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.ensure_started()?;

        let native_volume = self.scale.percent_to_native(percent)?;
        tracing::debug!(host = %self.host, native_volume, percent, "Set volume");

        self.send_volume(native_volume)?;
        self.state.native_volume = Some(native_volume);
        Ok(())
    }

    pub fn set_mute(&mut self, muted: bool) -> Result<()> {
        self.ensure_started()?;

        self.send_mute(muted)?;
        self.state.muted = Some(muted);
        Ok(())
    }

    pub fn power_state(&mut self) -> Result<PowerState> {
        self.ensure_started()?;
        Ok(self.client.execute(&self.host, &GetPowerOperation)?)
    }

    /// Bring the receiver into the state this client last established
    ///
    /// Power on, then input, party mode, volume and mute, each only if there
    /// is something to restore. The first failing step ends the sequence.
    pub fn start_playback(&mut self) -> Result<()> {
        self.ensure_started()?;

        self.set_device_to_known_state().map_err(|e| {
            tracing::warn!(host = %self.host, error = %e, "Failed to restore device state");
            e
        })
    }

    pub fn stop_playback(&mut self) -> Result<()> {
        self.ensure_started()?;
        self.send_power(PowerState::Standby)
    }

    fn set_device_to_known_state(&self) -> Result<()> {
        self.send_power(PowerState::On)?;

        if let Some(source) = &self.state.source {
            self.client.execute(
                &self.host,
                &SelectInputOperation {
                    source: source.clone(),
                },
            )?;
        }

        if let Some(enabled) = self.state.party_mode {
            self.client
                .execute(&self.host, &SetPartyModeOperation { enabled })?;
        }

        if let Some(native_volume) = self.state.native_volume {
            self.send_volume(native_volume)?;
        }

        if let Some(muted) = self.state.muted {
            self.send_mute(muted)?;
        }

        Ok(())
    }

    fn send_power(&self, state: PowerState) -> Result<()> {
        Ok(self.client.execute(&self.host, &SetPowerOperation { state })?)
    }

    fn send_volume(&self, native_volume: i32) -> Result<()> {
        Ok(self
            .client
            .execute(&self.host, &SetVolumeOperation { native_volume })?)
    }

    fn send_mute(&self, muted: bool) -> Result<()> {
        Ok(self.client.execute(&self.host, &SetMuteOperation { muted })?)
    }

    fn ensure_started(&self) -> Result<()> {
        if self.state.is_started() {
            Ok(())
        } else {
            Err(SessionError::NotReady)
        }
    }
}
