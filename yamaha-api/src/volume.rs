//! Conversion between the public percent scale and the receiver's native unit
//!
//! The receiver expresses volume in signed decibel-tenths below reference
//! (`-805` is -80.5 dB, `0` is 0.0 dB) and only accepts multiples of 5. The
//! public scale is an integer percent in `0..=100`.
//!
//! The two directions are not exact inverses: converting a percent to native
//! units quantizes down to the device step, so reading back a volume that was
//! just set may differ from the requested percent by up to 3.

use crate::error::ApiError;

/// Native value at 0 percent for the receiver families this crate targets
pub const MIN_NATIVE_VOLUME: i32 = -805;

/// Granularity of native volume values accepted by the receiver
pub const NATIVE_VOLUME_STEP: i32 = 5;

/// Highest valid percent value
pub const MAX_PERCENT: u8 = 100;

/// A linear mapping of `0..=100` percent onto `[min_native, 0]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeScale {
    min_native: i32,
}

impl VolumeScale {
    pub const fn new(min_native: i32) -> Self {
        Self { min_native }
    }

    pub fn min_native(&self) -> i32 {
        self.min_native
    }

    /// Convert a percent to the native value sent to the receiver
    ///
    /// The linear value is truncated to an integer and then rounded down to
    /// the nearest multiple of [`NATIVE_VOLUME_STEP`].
    pub fn percent_to_native(&self, percent: u8) -> Result<i32, ApiError> {
        if percent > MAX_PERCENT {
            return Err(ApiError::InvalidArgument(format!(
                "volume {} is outside 0..={}",
                percent, MAX_PERCENT
            )));
        }

        let min = f64::from(self.min_native);
        let linear = (-f64::from(percent) / 100.0 * min) + min;
        let truncated = linear.trunc() as i32;

        Ok(truncated - truncated.rem_euclid(NATIVE_VOLUME_STEP))
    }

    /// Convert a native value reported by the receiver to a percent
    ///
    /// Values outside `[min_native, 0]` are clamped into `0..=100`.
    pub fn native_to_percent(&self, native: i32) -> u8 {
        let min = f64::from(self.min_native);
        let percent = (-(f64::from(native) - min) / min * 100.0).round();

        percent.clamp(0.0, f64::from(MAX_PERCENT)) as u8
    }
}

impl Default for VolumeScale {
    fn default() -> Self {
        Self::new(MIN_NATIVE_VOLUME)
    }
}

/// [`VolumeScale::percent_to_native`] on the default scale
pub fn percent_to_native(percent: u8) -> Result<i32, ApiError> {
    VolumeScale::default().percent_to_native(percent)
}

/// [`VolumeScale::native_to_percent`] on the default scale
pub fn native_to_percent(native: i32) -> u8 {
    VolumeScale::default().native_to_percent(native)
}
