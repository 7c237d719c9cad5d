//! ELF header views.
//!
//! A header view is a non-owning overlay on the first bytes of a [`Buffer`],
//! constructed only when the buffer can hold the whole structure. Field
//! accessors decode on demand with the endianness declared in the ident
//! bytes; nothing is copied out of the buffer.

use crate::buffer::Buffer;
use crate::elf::types::{ElfData, ElfType, EHDR32_SIZE, EHDR64_SIZE, EI_DATA, EI_NIDENT};
use crate::elf::utils::{read_u16, read_u32, read_u64};

/// View of a 32-bit ELF header (52 bytes at offset 0).
#[derive(Debug, Clone, Copy)]
pub struct Ehdr32<'a> {
    raw: &'a [u8],
}

/// View of a 64-bit ELF header (64 bytes at offset 0).
#[derive(Debug, Clone, Copy)]
pub struct Ehdr64<'a> {
    raw: &'a [u8],
}

/// Views the 32-bit header, `None` when the buffer cannot hold one.
///
/// Deliberately does not consult the class byte: a caller may overlay the
/// 32-bit layout on any sufficiently large buffer and combine the result
/// with [`is_32`](crate::elf::detect::is_32).
pub fn ehdr32(buffer: &Buffer) -> Option<Ehdr32<'_>> {
    buffer.slice(0, EHDR32_SIZE).map(|raw| Ehdr32 { raw })
}

/// Views the 64-bit header, `None` when the buffer cannot hold one.
pub fn ehdr64(buffer: &Buffer) -> Option<Ehdr64<'_>> {
    buffer.slice(0, EHDR64_SIZE).map(|raw| Ehdr64 { raw })
}

impl<'a> Ehdr32<'a> {
    /// The 16 identification bytes.
    pub fn ident(&self) -> &'a [u8; EI_NIDENT] {
        self.raw[..EI_NIDENT].try_into().unwrap()
    }

    fn endian(&self) -> ElfData {
        ElfData::from_ident_byte(self.raw[EI_DATA])
    }

    pub fn e_type(&self) -> u16 {
        read_u16(self.raw, 16, self.endian())
    }

    pub fn e_machine(&self) -> u16 {
        read_u16(self.raw, 18, self.endian())
    }

    pub fn e_version(&self) -> u32 {
        read_u32(self.raw, 20, self.endian())
    }

    /// Entry point, widened to u64 for class-independent callers.
    pub fn e_entry(&self) -> u64 {
        read_u32(self.raw, 24, self.endian()) as u64
    }

    pub fn e_phoff(&self) -> u64 {
        read_u32(self.raw, 28, self.endian()) as u64
    }

    pub fn e_shoff(&self) -> u64 {
        read_u32(self.raw, 32, self.endian()) as u64
    }

    pub fn e_flags(&self) -> u32 {
        read_u32(self.raw, 36, self.endian())
    }

    pub fn e_ehsize(&self) -> u16 {
        read_u16(self.raw, 40, self.endian())
    }

    pub fn e_phentsize(&self) -> u16 {
        read_u16(self.raw, 42, self.endian())
    }

    pub fn e_phnum(&self) -> u16 {
        read_u16(self.raw, 44, self.endian())
    }

    pub fn e_shentsize(&self) -> u16 {
        read_u16(self.raw, 46, self.endian())
    }

    pub fn e_shnum(&self) -> u16 {
        read_u16(self.raw, 48, self.endian())
    }

    pub fn e_shstrndx(&self) -> u16 {
        read_u16(self.raw, 50, self.endian())
    }

    pub fn file_type(&self) -> ElfType {
        ElfType::from(self.e_type())
    }
}

impl<'a> Ehdr64<'a> {
    /// The 16 identification bytes.
    pub fn ident(&self) -> &'a [u8; EI_NIDENT] {
        self.raw[..EI_NIDENT].try_into().unwrap()
    }

    fn endian(&self) -> ElfData {
        ElfData::from_ident_byte(self.raw[EI_DATA])
    }

    pub fn e_type(&self) -> u16 {
        read_u16(self.raw, 16, self.endian())
    }

    pub fn e_machine(&self) -> u16 {
        read_u16(self.raw, 18, self.endian())
    }

    pub fn e_version(&self) -> u32 {
        read_u32(self.raw, 20, self.endian())
    }

    pub fn e_entry(&self) -> u64 {
        read_u64(self.raw, 24, self.endian())
    }

    pub fn e_phoff(&self) -> u64 {
        read_u64(self.raw, 32, self.endian())
    }

    /// Section-header table file offset. Untrusted; every consumer
    /// revalidates it against the buffer before dereferencing.
    pub fn e_shoff(&self) -> u64 {
        read_u64(self.raw, 40, self.endian())
    }

    pub fn e_flags(&self) -> u32 {
        read_u32(self.raw, 48, self.endian())
    }

    pub fn e_ehsize(&self) -> u16 {
        read_u16(self.raw, 52, self.endian())
    }

    pub fn e_phentsize(&self) -> u16 {
        read_u16(self.raw, 54, self.endian())
    }

    pub fn e_phnum(&self) -> u16 {
        read_u16(self.raw, 56, self.endian())
    }

    pub fn e_shentsize(&self) -> u16 {
        read_u16(self.raw, 58, self.endian())
    }

    pub fn e_shnum(&self) -> u16 {
        read_u16(self.raw, 60, self.endian())
    }

    pub fn e_shstrndx(&self) -> u16 {
        read_u16(self.raw, 62, self.endian())
    }

    pub fn file_type(&self) -> ElfType {
        ElfType::from(self.e_type())
    }
}
