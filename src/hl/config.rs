pub use crate::ll::{DeviceMode, FaultQueue, OsMode, OsPolarity};

use crate::ll::field_sets::Conf;

/// A fault queue size other than 1, 2, 4 or 6 was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidFaultQueue(pub u8);

impl FaultQueue {
    /// Look up the fault queue setting for a number of consecutive faults.
    pub const fn from_size(size: u8) -> Result<Self, InvalidFaultQueue> {
        match size {
            1 => Ok(FaultQueue::Queue1),
            2 => Ok(FaultQueue::Queue2),
            4 => Ok(FaultQueue::Queue4),
            6 => Ok(FaultQueue::Queue6),
            _ => Err(InvalidFaultQueue(size)),
        }
    }

    /// Number of consecutive faults required before OS is asserted.
    pub const fn size(self) -> u8 {
        match self {
            FaultQueue::Queue1 => 1,
            FaultQueue::Queue2 => 2,
            FaultQueue::Queue4 => 4,
            FaultQueue::Queue6 => 6,
        }
    }
}

/// Contents of the configuration register.
///
/// The default matches the power-on state of the device.
///
/// The overtemperature and hysteresis thresholds are not part of this configuration
/// and are left as they are on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Config {
    /// Number of consecutive faults before the OS output is asserted.
    pub fault_queue: FaultQueue,
    /// Active level of the OS output.
    pub os_polarity: OsPolarity,
    /// Whether OS behaves as a comparator or as an interrupt.
    pub os_mode: OsMode,
    /// Normal operation or shutdown.
    pub device_mode: DeviceMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fault_queue: FaultQueue::Queue1,
            os_polarity: OsPolarity::ActiveLow,
            os_mode: OsMode::Comparator,
            device_mode: DeviceMode::Normal,
        }
    }
}

impl Config {
    /// Build a configuration from raw register fields.
    ///
    /// `fault_queue_size` is the number of faults (1, 2, 4 or 6), not the register code.
    pub const fn try_new(
        fault_queue_size: u8,
        os_polarity_high: bool,
        os_interrupt: bool,
        shutdown: bool,
    ) -> Result<Self, InvalidFaultQueue> {
        let fault_queue = match FaultQueue::from_size(fault_queue_size) {
            Ok(fault_queue) => fault_queue,
            Err(e) => return Err(e),
        };

        Ok(Self {
            fault_queue,
            os_polarity: if os_polarity_high {
                OsPolarity::ActiveHigh
            } else {
                OsPolarity::ActiveLow
            },
            os_mode: if os_interrupt {
                OsMode::Interrupt
            } else {
                OsMode::Comparator
            },
            device_mode: if shutdown {
                DeviceMode::Shutdown
            } else {
                DeviceMode::Normal
            },
        })
    }

    /// Pack into the configuration register byte. Bits 7 to 5 are always cleared.
    pub fn to_byte(&self) -> u8 {
        (u8::from(self.fault_queue) << 3)
            | (u8::from(self.os_polarity) << 2)
            | (u8::from(self.os_mode) << 1)
            | u8::from(self.device_mode)
    }

    /// Unpack a configuration register byte, ignoring the reserved bits.
    pub fn from_byte(byte: u8) -> Self {
        Conf::from([byte]).into()
    }

    pub(crate) fn apply(&self, w: &mut Conf) {
        w.set_fault_queue(self.fault_queue);
        w.set_os_polarity(self.os_polarity);
        w.set_os_mode(self.os_mode);
        w.set_device_mode(self.device_mode);
    }
}

impl From<Conf> for Config {
    fn from(conf: Conf) -> Self {
        Self {
            fault_queue: conf.fault_queue(),
            os_polarity: conf.os_polarity(),
            os_mode: conf.os_mode(),
            device_mode: conf.device_mode(),
        }
    }
}
