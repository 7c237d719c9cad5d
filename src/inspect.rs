//! Generic object introspection through the `object` crate.
//!
//! Format classification, entry point, machine architecture, and sizes for
//! a fixed probe list of sections. The `object` crate is an external
//! collaborator here; this module only reads its surface and never second-
//! guesses its parsing.

use object::{Object, ObjectSection};
use tracing::debug;

use crate::buffer::Buffer;
use crate::error::{ProbeError, Result};

/// Sections probed for presence and size.
pub const PROBED_SECTIONS: &[&str] = &[".data", ".symtab", ".strtab", ".shstrtab"];

/// One probed section that was actually present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProbe {
    pub name: String,
    pub size: u64,
}

/// Summary of what the object layer sees in an image.
#[derive(Debug, Clone)]
pub struct ObjectReport {
    /// Container format label (e.g. `Elf`)
    pub format: String,
    /// Object kind label (e.g. `Executable`, `Dynamic`, `Core`)
    pub kind: String,
    /// Machine architecture label
    pub architecture: String,
    /// Declared entry address
    pub entry: u64,
    /// Probed sections that exist in the image
    pub sections: Vec<SectionProbe>,
}

/// Inspects the buffer as a generic object file.
///
/// Unlike the shallow decoder in [`crate::elf`], this goes through full
/// format parsing; anything the object layer rejects surfaces as
/// [`ProbeError::Malformed`].
pub fn inspect(buffer: &Buffer) -> Result<ObjectReport> {
    let file = object::File::parse(buffer.as_bytes())
        .map_err(|e| ProbeError::Malformed(e.to_string()))?;

    let mut sections = Vec::new();
    for name in PROBED_SECTIONS {
        if let Some(section) = file.section_by_name(name) {
            debug!(name, size = section.size(), "Probed section present");
            sections.push(SectionProbe {
                name: (*name).to_string(),
                size: section.size(),
            });
        }
    }

    Ok(ObjectReport {
        format: format!("{:?}", file.format()),
        kind: format!("{:?}", file.kind()),
        architecture: format!("{:?}", file.architecture()),
        entry: file.entry(),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elf::types::ELF_MAGIC;

    fn minimal_elf64_image() -> Vec<u8> {
        let mut data = vec![0u8; 64];
        data[0..4].copy_from_slice(ELF_MAGIC);
        data[4] = 2; // ELFCLASS64
        data[5] = 1; // ELFDATA2LSB
        data[6] = 1;
        data[16] = 3; // ET_DYN
        data[18] = 62; // EM_X86_64
        data[20] = 1;
        data[24..32].copy_from_slice(&0x1000u64.to_le_bytes()); // e_entry
        data[52] = 64; // e_ehsize
        data[54] = 56; // e_phentsize
        data[58] = 64; // e_shentsize
        data
    }

    #[test]
    fn test_inspect_minimal_elf() {
        let buffer = Buffer::from_bytes(minimal_elf64_image());
        let report = inspect(&buffer).unwrap();
        assert_eq!(report.format, "Elf");
        assert_eq!(report.kind, "Dynamic");
        assert_eq!(report.entry, 0x1000);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_inspect_garbage_is_malformed() {
        let buffer = Buffer::from_bytes(&b"not an object file at all"[..]);
        let result = inspect(&buffer);
        assert!(matches!(result, Err(ProbeError::Malformed(_))));
    }
}
