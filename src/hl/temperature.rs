use super::Error;

/// Degrees Celsius per least significant bit of the temperature register.
pub const RESOLUTION: f32 = 0.125;

const MASK: u16 = 0x7FF;
const SIGN: u16 = 0x400;

/// Convert an 11-bit two's complement temperature reading into degrees Celsius.
///
/// Bits above the low 11 are ignored.
pub fn eleven_bit_signed_to_celsius(raw11: u16) -> f32 {
    Temperature::from_raw11(raw11).celsius()
}

/// A temperature sample with 0.125 °C resolution.
///
/// The datasheet range is -55 °C to +125 °C, but any value the register can hold
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Temperature(i16);

/// A raw sample was not exactly two bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidSampleLength(pub usize);

impl Temperature {
    /// Decode the 11 significant bits of the temperature register.
    pub const fn from_raw11(raw11: u16) -> Self {
        let raw11 = raw11 & MASK;
        if raw11 & SIGN != 0 {
            Temperature(-(((raw11 ^ MASK) + 1) as i16))
        } else {
            Temperature(raw11 as i16)
        }
    }

    /// Decode the two bytes read from the temperature register, most significant first.
    ///
    /// The low five bits of the second byte are not part of the reading.
    pub const fn from_register_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw11(((bytes[0] as u16) << 3) | ((bytes[1] as u16) >> 5))
    }

    /// Decode a raw sample of unknown length.
    ///
    /// Returns [Error::InvalidArgument] unless `bytes` is exactly two bytes long.
    pub fn from_slice<T>(bytes: &[u8]) -> Result<Self, Error<T>> {
        Ok(Self::try_from(bytes)?)
    }

    /// Signed reading in steps of [RESOLUTION].
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Value in degrees Celsius.
    pub fn celsius(self) -> f32 {
        f32::from(self.0) * RESOLUTION
    }
}

impl TryFrom<&[u8]> for Temperature {
    type Error = InvalidSampleLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 2] = bytes
            .try_into()
            .map_err(|_| InvalidSampleLength(bytes.len()))?;
        Ok(Self::from_register_bytes(bytes))
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> Self {
        value.celsius()
    }
}
