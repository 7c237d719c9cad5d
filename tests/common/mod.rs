//! Shared builders for hand-crafted ELF images.

/// A minimal, well-formed 64-bit ELF header (64 bytes, little-endian,
/// `ET_DYN`, x86-64). No program or section tables.
pub fn minimal_elf64_header() -> Vec<u8> {
    let mut data = vec![0u8; 64];
    data[0..4].copy_from_slice(b"\x7fELF");
    data[4] = 2; // ELFCLASS64
    data[5] = 1; // ELFDATA2LSB
    data[6] = 1; // EV_CURRENT
    data[16] = 3; // e_type = ET_DYN
    data[18] = 62; // e_machine = EM_X86_64
    data[20] = 1; // e_version
    data[24..32].copy_from_slice(&0x1000u64.to_le_bytes()); // e_entry
    data[52] = 64; // e_ehsize
    data[54] = 56; // e_phentsize
    data[58] = 64; // e_shentsize
    data
}

/// Header plus a section-header table immediately after it. Each entry is
/// `(sh_name, sh_type, sh_size)` with everything else zeroed.
pub fn elf64_with_sections(entries: &[(u32, u32, u64)]) -> Vec<u8> {
    let mut data = minimal_elf64_header();
    data[40..48].copy_from_slice(&64u64.to_le_bytes()); // e_shoff
    data[60..62].copy_from_slice(&(entries.len() as u16).to_le_bytes()); // e_shnum

    for &(name, sh_type, size) in entries {
        let mut entry = vec![0u8; 64];
        entry[0..4].copy_from_slice(&name.to_le_bytes());
        entry[4..8].copy_from_slice(&sh_type.to_le_bytes());
        entry[32..40].copy_from_slice(&size.to_le_bytes());
        data.extend_from_slice(&entry);
    }
    data
}

/// Overwrites `e_shoff` in a 64-bit header image.
pub fn patch_shoff(data: &mut [u8], shoff: u64) {
    data[40..48].copy_from_slice(&shoff.to_le_bytes());
}
