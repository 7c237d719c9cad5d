//! Section-header table views (64-bit).
//!
//! The table offset, entry size, and entry count all come from the file and
//! are treated as hostile. The table is constructed only when the first
//! entry fits inside the buffer, the advertised count is clamped to what the
//! buffer can actually hold, and every entry lookup revalidates its own
//! offset range. All arithmetic on file-supplied offsets is checked.

use crate::buffer::Buffer;
use crate::elf::headers::ehdr64;
use crate::elf::types::{ElfData, SectionType, EI_DATA, SHDR64_SIZE};
use crate::elf::utils::{read_u32, read_u64};

/// View of one 64-bit section-header entry.
#[derive(Debug, Clone, Copy)]
pub struct Shdr64<'a> {
    raw: &'a [u8],
    endian: ElfData,
}

impl<'a> Shdr64<'a> {
    pub fn sh_name(&self) -> u32 {
        read_u32(self.raw, 0, self.endian)
    }

    pub fn sh_type(&self) -> u32 {
        read_u32(self.raw, 4, self.endian)
    }

    pub fn sh_flags(&self) -> u64 {
        read_u64(self.raw, 8, self.endian)
    }

    pub fn sh_addr(&self) -> u64 {
        read_u64(self.raw, 16, self.endian)
    }

    pub fn sh_offset(&self) -> u64 {
        read_u64(self.raw, 24, self.endian)
    }

    pub fn sh_size(&self) -> u64 {
        read_u64(self.raw, 32, self.endian)
    }

    pub fn sh_link(&self) -> u32 {
        read_u32(self.raw, 40, self.endian)
    }

    pub fn sh_info(&self) -> u32 {
        read_u32(self.raw, 44, self.endian)
    }

    pub fn sh_addralign(&self) -> u64 {
        read_u64(self.raw, 48, self.endian)
    }

    pub fn sh_entsize(&self) -> u64 {
        read_u64(self.raw, 56, self.endian)
    }

    pub fn section_type(&self) -> SectionType {
        SectionType::from(self.sh_type())
    }
}

/// Indexable, length-bounded view of the 64-bit section-header table.
#[derive(Debug, Clone, Copy)]
pub struct Shdr64Table<'a> {
    buffer: &'a Buffer,
    shoff: u64,
    count: usize,
    endian: ElfData,
}

/// Locates the section-header table through the 64-bit ELF header.
///
/// `None` whenever [`ehdr64`] is `None`, the header advertises an entry size
/// other than the fixed 64-byte layout, the table offset is zero (no table),
/// or the first entry would not fit inside the buffer. A malformed `e_shoff`
/// near `u64::MAX` cannot overflow into a successful lookup.
pub fn shdr_table64(buffer: &Buffer) -> Option<Shdr64Table<'_>> {
    let hdr = ehdr64(buffer)?;

    if hdr.e_shentsize() as usize != SHDR64_SIZE {
        return None;
    }

    let shoff = hdr.e_shoff();
    if shoff == 0 {
        return None;
    }

    // Room for at least the first entry.
    let size = buffer.size() as u64;
    let first_end = shoff.checked_add(SHDR64_SIZE as u64)?;
    if first_end > size {
        return None;
    }

    // The count field is untrusted; clamp it to the entries that physically
    // fit between the table offset and end-of-buffer.
    let available = ((size - shoff) / SHDR64_SIZE as u64) as usize;
    let count = (hdr.e_shnum() as usize).min(available);
    if count == 0 {
        return None;
    }

    let endian = ElfData::from_ident_byte(hdr.ident()[EI_DATA]);
    Some(Shdr64Table {
        buffer,
        shoff,
        count,
        endian,
    })
}

impl<'a> Shdr64Table<'a> {
    /// Number of in-bounds entries (advertised count, clamped).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Views the entry at `index`, revalidating its byte range.
    pub fn get(&self, index: usize) -> Option<Shdr64<'a>> {
        if index >= self.count {
            return None;
        }
        let offset = self
            .shoff
            .checked_add((index as u64).checked_mul(SHDR64_SIZE as u64)?)?;
        let raw = self.buffer.slice(offset, SHDR64_SIZE)?;
        Some(Shdr64 {
            raw,
            endian: self.endian,
        })
    }

    /// The first entry of the table.
    pub fn first(&self) -> Option<Shdr64<'a>> {
        self.get(0)
    }

    /// Lazy iterator over the validated entries. Restartable: each call
    /// starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = Shdr64<'a>> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }
}
