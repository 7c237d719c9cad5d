//! Fixed-width field decoding for header views.
//!
//! Callers guarantee the offset range is inside the slice; view constructors
//! only hand out slices of exactly the structure size, so these never see an
//! out-of-range offset.

use crate::elf::types::ElfData;

pub(crate) fn read_u16(bytes: &[u8], offset: usize, endian: ElfData) -> u16 {
    let raw: [u8; 2] = bytes[offset..offset + 2].try_into().unwrap();
    match endian {
        ElfData::Little => u16::from_le_bytes(raw),
        ElfData::Big => u16::from_be_bytes(raw),
    }
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize, endian: ElfData) -> u32 {
    let raw: [u8; 4] = bytes[offset..offset + 4].try_into().unwrap();
    match endian {
        ElfData::Little => u32::from_le_bytes(raw),
        ElfData::Big => u32::from_be_bytes(raw),
    }
}

pub(crate) fn read_u64(bytes: &[u8], offset: usize, endian: ElfData) -> u64 {
    let raw: [u8; 8] = bytes[offset..offset + 8].try_into().unwrap();
    match endian {
        ElfData::Little => u64::from_le_bytes(raw),
        ElfData::Big => u64::from_be_bytes(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endian_read() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];

        assert_eq!(read_u16(&data, 0, ElfData::Little), 0x3412);
        assert_eq!(read_u32(&data, 0, ElfData::Little), 0x78563412);
        assert_eq!(read_u64(&data, 0, ElfData::Little), 0xf0debc9a78563412);

        assert_eq!(read_u16(&data, 0, ElfData::Big), 0x1234);
        assert_eq!(read_u32(&data, 0, ElfData::Big), 0x12345678);
        assert_eq!(read_u64(&data, 0, ElfData::Big), 0x123456789abcdef0);

        assert_eq!(read_u16(&data, 2, ElfData::Big), 0x5678);
    }
}
