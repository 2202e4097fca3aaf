use embedded_hal::i2c::ErrorType;

// Pointer byte followed by the widest register, which is 16 bits.
const MAX_WRITE_SIZE: usize = 3;

use crate::ll::DeviceError;

/// Register access for the LM75BD over I2C.
///
/// Every register access first writes the pointer byte. Reads are issued as a separate
/// transaction after the pointer write, never as a repeated start.
pub struct DeviceInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> DeviceInterface<I2C> {
    /// Construct a new instance of the device.
    ///
    /// I2C max frequency 400kHz.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }
}

fn frame<E>(
    address: u8,
    data: &[u8],
) -> Result<heapless::Vec<u8, MAX_WRITE_SIZE>, DeviceError<E>> {
    let mut vec = heapless::Vec::<u8, MAX_WRITE_SIZE>::new();
    vec.push(address).map_err(|_| DeviceError::BufferTooSmall)?;
    vec.extend_from_slice(data)
        .map_err(|_| DeviceError::BufferTooSmall)?;
    Ok(vec)
}

impl<I2C> device_driver::RegisterInterface for DeviceInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = DeviceError<<I2C as ErrorType>::Error>;

    type AddressType = u8;

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let vec = frame(address, data)?;
        #[cfg(feature = "defmt-03")]
        defmt::trace!("lm75bd {=u8:#x}: write {=[u8]:#x}", self.address, &vec[..]);
        Ok(self.i2c.write(self.address, &vec)?)
    }

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[address])?;
        self.i2c.read(self.address, data)?;
        #[cfg(feature = "defmt-03")]
        defmt::trace!(
            "lm75bd {=u8:#x}: read {=u8:#x} -> {=[u8]:#x}",
            self.address,
            address,
            &data[..]
        );
        Ok(())
    }
}

impl<I2C> device_driver::AsyncRegisterInterface for DeviceInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Error = DeviceError<<I2C as ErrorType>::Error>;

    type AddressType = u8;

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let vec = frame(address, data)?;
        #[cfg(feature = "defmt-03")]
        defmt::trace!("lm75bd {=u8:#x}: write {=[u8]:#x}", self.address, &vec[..]);
        Ok(self.i2c.write(self.address, &vec).await?)
    }

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[address]).await?;
        self.i2c.read(self.address, data).await?;
        #[cfg(feature = "defmt-03")]
        defmt::trace!(
            "lm75bd {=u8:#x}: read {=u8:#x} -> {=[u8]:#x}",
            self.address,
            address,
            &data[..]
        );
        Ok(())
    }
}
