use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

use crate::ll::{self, DeviceError};

const ADDRESS: u8 = 0b1001_000;

fn regw(register: u8, values: &[u8]) -> Transaction {
    let mut expected = vec![register];
    expected.extend_from_slice(values);
    Transaction::write(ADDRESS, expected)
}

fn regr(register: u8, values: &[u8]) -> [Transaction; 2] {
    [
        Transaction::write(ADDRESS, vec![register]),
        Transaction::read(ADDRESS, Vec::from(values)),
    ]
}

#[test]
fn conf_write_read() {
    let [pointer, data] = regr(0x01, &[0b0001_1010]);
    let expectations = [regw(0x01, &[0b0001_0110]), pointer, data];

    let mut i2c = Mock::new(&expectations);

    let mut ll = ll::Device::new(ll::i2c::DeviceInterface::new(&mut i2c, ADDRESS));
    ll.conf()
        .write(|w| {
            w.set_fault_queue(ll::FaultQueue::Queue4);
            w.set_os_polarity(ll::OsPolarity::ActiveHigh);
            w.set_os_mode(ll::OsMode::Interrupt);
        })
        .unwrap();

    let conf = ll.conf().read().unwrap();
    assert_eq!(conf.fault_queue(), ll::FaultQueue::Queue6);
    assert_eq!(conf.os_polarity(), ll::OsPolarity::ActiveLow);
    assert_eq!(conf.os_mode(), ll::OsMode::Interrupt);
    assert_eq!(conf.device_mode(), ll::DeviceMode::Normal);

    i2c.done();
}

#[test]
fn temp_is_big_endian() {
    let expectations = regr(0x00, &[0xE7, 0x00]);

    let mut i2c = Mock::new(&expectations);

    let mut ll = ll::Device::new(ll::i2c::DeviceInterface::new(&mut i2c, ADDRESS));
    assert_eq!(ll.temp().read().unwrap().raw(), 0x738);

    i2c.done();
}

#[test]
fn pointer_failure_skips_read() {
    let expectations = [Transaction::write(ADDRESS, vec![0x00]).with_error(ErrorKind::Other)];

    let mut i2c = Mock::new(&expectations);

    let mut ll = ll::Device::new(ll::i2c::DeviceInterface::new(&mut i2c, ADDRESS));
    assert_eq!(
        ll.temp().read().map(|r| r.raw()),
        Err(DeviceError::Interface(ErrorKind::Other))
    );

    i2c.done();
}

#[async_std::test]
async fn conf_write_async() {
    let expectations = [regw(0x01, &[0b0000_0001])];

    let mut i2c = Mock::new(&expectations);

    let mut ll = ll::Device::new(ll::i2c::DeviceInterface::new(&mut i2c, ADDRESS));
    ll.conf()
        .write_async(|w| w.set_device_mode(ll::DeviceMode::Shutdown))
        .await
        .unwrap();

    i2c.done();
}
