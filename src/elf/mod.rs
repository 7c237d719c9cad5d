//! Shallow, read-only ELF decoding over a bounded buffer.
//!
//! Stateless operations layered on [`Buffer`](crate::buffer::Buffer):
//! detection ([`is_elf`], [`is_32`], [`is_64`]) and bounds-validated header
//! views ([`ehdr32`], [`ehdr64`], [`shdr_table64`]). Header structures are
//! decoded, their semantic payloads are not.

pub mod detect;
pub mod headers;
pub mod sections;
pub mod types;
mod utils;

pub use detect::{class, is_32, is_64, is_elf};
pub use headers::{ehdr32, ehdr64, Ehdr32, Ehdr64};
pub use sections::{shdr_table64, Shdr64, Shdr64Table};
pub use types::*;
