//! Domain Services
//!
//! Stateless logic over the device tool's textual output.

pub mod ecid;

pub use ecid::{extract_identifier, parse_device_list, ECID_MARKER};
