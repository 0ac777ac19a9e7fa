pub mod artifacts;
pub mod deploy;
pub mod devices;
