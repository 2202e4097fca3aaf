
mod config;
mod temperature;

pub use config::{Config, DeviceMode, FaultQueue, InvalidFaultQueue, OsMode, OsPolarity};
pub use temperature::{eleven_bit_signed_to_celsius, InvalidSampleLength, Temperature, RESOLUTION};

use crate::ll::{self, DeviceError};

/// Base I2C address, with A2, A1 and A0 tied to GND.
pub const I2C_ADDRESS_BASE: u8 = 0b0100_1000;

/// I2C address used to address the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Address {
    /// Address selected by the levels of the A2, A1 and A0 pins (`true` is VCC).
    Pins { a2: bool, a1: bool, a0: bool },
    /// Raw 7-bit address, for boards with a non-standard strapping or address translator.
    Custom(u8),
}

impl Default for Address {
    /// All address pins tied to GND.
    fn default() -> Self {
        Address::Pins {
            a2: false,
            a1: false,
            a0: false,
        }
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        match value {
            Address::Pins { a2, a1, a0 } => {
                I2C_ADDRESS_BASE | (u8::from(a2) << 2) | (u8::from(a1) << 1) | u8::from(a0)
            }
            Address::Custom(address) => address,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<T> {
    /// The underlying I2C interface returned an error.
    Interface(T),
    /// An argument was outside of what the device accepts.
    ///
    /// For example: a fault queue of 3, or a temperature sample that is not two bytes long.
    InvalidArgument,
}

impl<T> From<DeviceError<T>> for Error<T> {
    fn from(value: DeviceError<T>) -> Self {
        match value {
            DeviceError::Interface(e) => Error::Interface(e),
            DeviceError::BufferTooSmall => unreachable!(), // Should never happen.
        }
    }
}

impl<T> From<InvalidFaultQueue> for Error<T> {
    fn from(_: InvalidFaultQueue) -> Self {
        Error::InvalidArgument
    }
}

impl<T> From<InvalidSampleLength> for Error<T> {
    fn from(_: InvalidSampleLength) -> Self {
        Error::InvalidArgument
    }
}

/// Driver for the LM75BD digital temperature sensor.
///
/// The driver holds nothing besides the bus and the address, every call goes to the device.
/// Both blocking and async variants are provided, depending on which `I2c` trait the bus
/// implements.
pub struct Lm75bd<T> {
    device: ll::Device<ll::i2c::DeviceInterface<T>>,
}

impl<T> Lm75bd<T> {
    /// Construct the driver. Does not touch the bus.
    pub fn new(interface: T, address: Address) -> Self {
        Self {
            device: ll::Device::new(ll::i2c::DeviceInterface::new(interface, address.into())),
        }
    }

    /// Direct access to the registers.
    pub fn ll(&mut self) -> &mut ll::Device<ll::i2c::DeviceInterface<T>> {
        &mut self.device
    }
}

impl<T: embedded_hal::i2c::I2c> Lm75bd<T> {
    /// Write the configuration register.
    ///
    /// Moves the device from its reset configuration into the requested operating mode.
    /// The overtemperature and hysteresis thresholds are not touched.
    pub fn initialize(&mut self, config: &Config) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("lm75bd: configure {} ({=u8:#b})", config, config.to_byte());

        self.device.conf().write(|w| config.apply(w))?;
        Ok(())
    }

    /// Read back the configuration register.
    pub fn read_configuration(&mut self) -> Result<Config, Error<T::Error>> {
        Ok(self.device.conf().read()?.into())
    }

    /// Read the most recent temperature conversion.
    pub fn read_temperature(&mut self) -> Result<Temperature, Error<T::Error>> {
        let temperature = Temperature::from_raw11(self.device.temp().read()?.raw());
        #[cfg(feature = "defmt-03")]
        defmt::debug!("lm75bd: {=f32} C", temperature.celsius());

        Ok(temperature)
    }
}

impl<T: embedded_hal_async::i2c::I2c> Lm75bd<T> {
    /// Async variant of [Lm75bd::initialize].
    pub async fn initialize_async(&mut self, config: &Config) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt-03")]
        defmt::debug!("lm75bd: configure {} ({=u8:#b})", config, config.to_byte());

        self.device.conf().write_async(|w| config.apply(w)).await?;
        Ok(())
    }

    /// Async variant of [Lm75bd::read_configuration].
    pub async fn read_configuration_async(&mut self) -> Result<Config, Error<T::Error>> {
        Ok(self.device.conf().read_async().await?.into())
    }

    /// Async variant of [Lm75bd::read_temperature].
    pub async fn read_temperature_async(&mut self) -> Result<Temperature, Error<T::Error>> {
        let temperature = Temperature::from_raw11(self.device.temp().read_async().await?.raw());
        #[cfg(feature = "defmt-03")]
        defmt::debug!("lm75bd: {=f32} C", temperature.celsius());

        Ok(temperature)
    }
}
