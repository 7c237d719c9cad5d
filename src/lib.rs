//! elfprobe: bounds-checked inspection of untrusted object files.
//!
//! Two layers. The [`buffer`] module owns an in-memory image of a possibly
//! truncated or hostile file and is the only way to get a slice of it; every
//! access is validated against the image's extent first. The [`elf`] module
//! is a stateless, shallow decoder on top: magic and class detection, plus
//! typed read-only views of the ELF header and section-header table that
//! simply fail to exist when the bytes for them do not.
//!
//! [`inspect`] additionally runs the image through the `object` crate for
//! generic format/architecture classification.

pub mod buffer;
pub mod elf;
pub mod error;
pub mod inspect;
pub mod logging;

pub use buffer::{Buffer, IoLimits};
pub use error::{ProbeError, Result};
