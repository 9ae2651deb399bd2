use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::codes::{self, Command, HouseCode};

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("device number out of range: {0} (must be between 1 and 16)")]
    DeviceOutOfRange(u8),
}

/// The 16-bit data word of a CM17A frame.
///
/// On the wire it is wrapped in a fixed header and footer:
/// `0xD5 0xAA <hi> <lo> 0xAD`, 40 bits total. The word itself is the OR of
/// the house pattern, the device pattern (On/Off only) and the command
/// pattern; the tables in [`crate::codes`] are bit-disjoint so the OR loses
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(pub u16);

impl Frame {
    pub const HEADER: [u8; 2] = [0xD5, 0xAA];
    pub const FOOTER: u8 = 0xAD;

    /// Byte length of an encoded frame.
    pub const LEN: usize = 5;

    /// Builds the frame for one command.
    ///
    /// `device` must be in 1..=16 and is checked for every command, even the
    /// ones that do not encode it. Bright, Dim and the All*/Lamps* commands
    /// operate on the house code (or its last-addressed device), so the
    /// device pattern is omitted for them.
    pub fn new(house: HouseCode, device: u8, command: Command) -> Result<Self, EncodeError> {
        if !(1..=16).contains(&device) {
            return Err(EncodeError::DeviceOutOfRange(device));
        }

        let mut data = house.pattern() | command.pattern();
        if command.addresses_device() {
            data |= codes::device_pattern(device);
        }

        Ok(Frame(data))
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut b = BytesMut::with_capacity(Self::LEN);
        b.put_slice(&Self::HEADER);
        b.put_u16(self.0);
        b.put_u8(Self::FOOTER);
        b.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use strum::IntoEnumIterator;

    #[test]
    fn known_frames() {
        let frame = Frame::new(HouseCode::A, 1, Command::On).unwrap();
        assert_eq!(frame.0, 0x6000);
        assert_eq!(hex::encode(frame.to_bytes()), "d5aa6000ad");

        let frame = Frame::new(HouseCode::P, 16, Command::Off).unwrap();
        assert_eq!(frame.0, 0x3478);
        assert_eq!(frame.to_bytes().as_ref(), hex!("d5aa3478ad"));

        let frame = Frame::new(HouseCode::M, 1, Command::Bright).unwrap();
        assert_eq!(frame.0, 0x0088);
        assert_eq!(frame.to_bytes().as_ref(), hex!("d5aa0088ad"));
    }

    #[test]
    fn header_and_footer_are_fixed() {
        for house in HouseCode::iter() {
            for device in 1..=16u8 {
                for command in Command::iter() {
                    let bytes = Frame::new(house, device, command).unwrap().to_bytes();
                    assert_eq!(bytes.len(), Frame::LEN);
                    assert_eq!(&bytes[0..2], Frame::HEADER);
                    assert_eq!(bytes[4], Frame::FOOTER);
                }
            }
        }
    }

    #[test]
    fn on_and_off_encode_the_device() {
        let dev1 = Frame::new(HouseCode::C, 1, Command::Off).unwrap();
        let dev9 = Frame::new(HouseCode::C, 9, Command::Off).unwrap();
        assert_ne!(dev1, dev9);
        assert_eq!(dev9.0, 0x4000 | 0x0400 | 0x0020);
    }

    #[test]
    fn broadcast_commands_ignore_the_device() {
        for command in Command::iter().filter(|c| !c.addresses_device()) {
            let reference = Frame::new(HouseCode::E, 1, command).unwrap();
            for device in 2..=16u8 {
                assert_eq!(Frame::new(HouseCode::E, device, command).unwrap(), reference);
            }
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = Frame::new(HouseCode::K, 12, Command::On).unwrap();
        let b = Frame::new(HouseCode::K, 12, Command::On).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn device_out_of_range_is_rejected() {
        assert_eq!(
            Frame::new(HouseCode::A, 0, Command::On),
            Err(EncodeError::DeviceOutOfRange(0))
        );
        assert_eq!(
            Frame::new(HouseCode::A, 17, Command::On),
            Err(EncodeError::DeviceOutOfRange(17))
        );
        // Also rejected for commands that would not encode the device.
        assert_eq!(
            Frame::new(HouseCode::A, 0, Command::AllOff),
            Err(EncodeError::DeviceOutOfRange(0))
        );
    }
}
