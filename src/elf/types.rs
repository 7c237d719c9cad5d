//! Core ELF types and constants

use std::fmt;

/// ELF magic number
pub const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Identification byte indices
pub const EI_CLASS: usize = 4;
pub const EI_DATA: usize = 5;
pub const EI_NIDENT: usize = 16;

/// Class byte values
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;

/// Fixed structure sizes per class
pub const EHDR32_SIZE: usize = 52;
pub const EHDR64_SIZE: usize = 64;
pub const SHDR64_SIZE: usize = 64;

/// ELF class (32-bit or 64-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32 = 1,
    Elf64 = 2,
}

impl ElfClass {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            ELFCLASS32 => Some(ElfClass::Elf32),
            ELFCLASS64 => Some(ElfClass::Elf64),
            _ => None,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            ElfClass::Elf32 => 32,
            ElfClass::Elf64 => 64,
        }
    }
}

/// ELF data encoding (endianness)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfData {
    Little = 1,
    Big = 2,
}

impl ElfData {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            1 => Some(ElfData::Little),
            2 => Some(ElfData::Big),
            _ => None,
        }
    }

    /// Encoding used when decoding header fields. An unrecognized byte falls
    /// back to little-endian so truncation-tolerant callers still get a view.
    pub fn from_ident_byte(val: u8) -> Self {
        match val {
            2 => ElfData::Big,
            _ => ElfData::Little,
        }
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, ElfData::Little)
    }
}

/// ELF file type (`e_type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfType {
    None,
    Relocatable,
    Executable,
    SharedObject,
    Core,
    Other(u16),
}

impl From<u16> for ElfType {
    fn from(val: u16) -> Self {
        match val {
            0 => ElfType::None,
            1 => ElfType::Relocatable,
            2 => ElfType::Executable,
            3 => ElfType::SharedObject,
            4 => ElfType::Core,
            other => ElfType::Other(other),
        }
    }
}

impl fmt::Display for ElfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE (No file type)"),
            Self::Relocatable => write!(f, "REL (Relocatable file)"),
            Self::Executable => write!(f, "EXEC (Executable file)"),
            Self::SharedObject => write!(f, "DYN (Shared object file)"),
            Self::Core => write!(f, "CORE (Core file)"),
            Self::Other(val) => write!(f, "{}", val),
        }
    }
}

/// Section types (`sh_type`)
pub const SHT_NULL: u32 = 0;
pub const SHT_PROGBITS: u32 = 1;
pub const SHT_SYMTAB: u32 = 2;
pub const SHT_STRTAB: u32 = 3;
pub const SHT_RELA: u32 = 4;
pub const SHT_HASH: u32 = 5;
pub const SHT_DYNAMIC: u32 = 6;
pub const SHT_NOTE: u32 = 7;
pub const SHT_NOBITS: u32 = 8;
pub const SHT_REL: u32 = 9;
pub const SHT_DYNSYM: u32 = 11;

/// Section type (`sh_type`) with `readelf`-style labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    Null,
    ProgBits,
    SymTab,
    StrTab,
    Rela,
    Hash,
    Dynamic,
    Note,
    NoBits,
    Rel,
    DynSym,
    Other(u32),
}

impl From<u32> for SectionType {
    fn from(val: u32) -> Self {
        match val {
            SHT_NULL => SectionType::Null,
            SHT_PROGBITS => SectionType::ProgBits,
            SHT_SYMTAB => SectionType::SymTab,
            SHT_STRTAB => SectionType::StrTab,
            SHT_RELA => SectionType::Rela,
            SHT_HASH => SectionType::Hash,
            SHT_DYNAMIC => SectionType::Dynamic,
            SHT_NOTE => SectionType::Note,
            SHT_NOBITS => SectionType::NoBits,
            SHT_REL => SectionType::Rel,
            SHT_DYNSYM => SectionType::DynSym,
            other => SectionType::Other(other),
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::ProgBits => write!(f, "PROGBITS"),
            Self::SymTab => write!(f, "SYMTAB"),
            Self::StrTab => write!(f, "STRTAB"),
            Self::Rela => write!(f, "RELA"),
            Self::Hash => write!(f, "HASH"),
            Self::Dynamic => write!(f, "DYNAMIC"),
            Self::Note => write!(f, "NOTE"),
            Self::NoBits => write!(f, "NOBITS"),
            Self::Rel => write!(f, "REL"),
            Self::DynSym => write!(f, "DYNSYM"),
            Self::Other(val) => write!(f, "{}", val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_u8() {
        assert_eq!(ElfClass::from_u8(1), Some(ElfClass::Elf32));
        assert_eq!(ElfClass::from_u8(2), Some(ElfClass::Elf64));
        assert_eq!(ElfClass::from_u8(0), None);
        assert_eq!(ElfClass::from_u8(3), None);
        assert_eq!(ElfClass::Elf64.bits(), 64);
    }

    #[test]
    fn test_data_encoding() {
        assert_eq!(ElfData::from_u8(1), Some(ElfData::Little));
        assert_eq!(ElfData::from_u8(2), Some(ElfData::Big));
        assert_eq!(ElfData::from_u8(0), None);
        // Lenient decoding falls back to little-endian.
        assert_eq!(ElfData::from_ident_byte(0), ElfData::Little);
        assert_eq!(ElfData::from_ident_byte(2), ElfData::Big);
        assert!(ElfData::Little.is_little_endian());
    }

    #[test]
    fn test_elf_type_labels() {
        assert_eq!(ElfType::from(2), ElfType::Executable);
        assert_eq!(ElfType::from(2).to_string(), "EXEC (Executable file)");
        assert_eq!(ElfType::from(3).to_string(), "DYN (Shared object file)");
        assert_eq!(ElfType::from(999), ElfType::Other(999));
        assert_eq!(ElfType::from(999).to_string(), "999");
    }

    #[test]
    fn test_section_type_labels() {
        assert_eq!(SectionType::from(SHT_PROGBITS).to_string(), "PROGBITS");
        assert_eq!(SectionType::from(SHT_STRTAB).to_string(), "STRTAB");
        assert_eq!(SectionType::from(0x6ffffff6), SectionType::Other(0x6ffffff6));
    }
}
