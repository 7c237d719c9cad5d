//! ELF magic and class detection.
//!
//! Tri-state predicates over a [`Buffer`]: `Some(true)`/`Some(false)` when
//! the bytes answer the question, `None` when the buffer is unusable and the
//! question cannot be asked. All of them are pure queries; asking twice
//! always gives the same answer.

use crate::buffer::Buffer;
use crate::elf::types::{ElfClass, EI_CLASS, ELFCLASS32, ELFCLASS64, ELF_MAGIC};

/// Does the buffer start with the ELF magic sequence?
pub fn is_elf(buffer: &Buffer) -> Option<bool> {
    match buffer.slice(0, ELF_MAGIC.len()) {
        Some(magic) => Some(magic == ELF_MAGIC),
        None if buffer.is_usable() => Some(false), // usable but shorter than the magic
        None => None,
    }
}

/// Does the class byte declare a 32-bit layout?
///
/// Mutually exclusive with [`is_64`] by construction: the single class byte
/// cannot hold both values. A class byte that is neither 1 nor 2 answers
/// `Some(false)` from both predicates; rejecting such files is the caller's
/// decision.
pub fn is_32(buffer: &Buffer) -> Option<bool> {
    class_byte(buffer).map(|b| b == ELFCLASS32)
}

/// Does the class byte declare a 64-bit layout?
pub fn is_64(buffer: &Buffer) -> Option<bool> {
    class_byte(buffer).map(|b| b == ELFCLASS64)
}

/// Combined classification: the declared class, when the buffer carries a
/// recognizable one.
pub fn class(buffer: &Buffer) -> Option<ElfClass> {
    class_byte(buffer).and_then(ElfClass::from_u8)
}

fn class_byte(buffer: &Buffer) -> Option<u8> {
    if !buffer.is_usable() {
        return None;
    }
    // A usable buffer shorter than 5 bytes has no class byte; that reads as
    // "declares neither class", not as a precondition failure.
    Some(buffer.byte_at(EI_CLASS as u64).unwrap_or(0))
}
