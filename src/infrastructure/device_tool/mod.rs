//! Device tool adapters

mod cfgutil;

pub use cfgutil::CfgutilTool;
