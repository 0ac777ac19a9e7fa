//! Test fixtures - reusable content constants for tests.

/// Minimal Tauri v2 descriptor
pub const TAURI_CONF: &str = r#"{
  "productName": "Test App",
  "version": "1.2.3",
  "identifier": "com.example.testapp"
}"#;

/// Descriptor without a product name
pub const TAURI_CONF_NO_PRODUCT: &str = r#"{ "version": "1.2.3" }"#;

/// `cfgutil list` line for an iPhone
pub const IPHONE_LINE: &str =
    "Type: iPhone15,2\tECID: 0x1A2B3C4D5E6F\tUDID: 00008120-001A2B3C\tLocation: 0x100000\tName: Test iPhone";

/// `cfgutil list` line for an iPad
pub const IPAD_LINE: &str =
    "Type: iPad13,4\tECID: 0x00FEEDBEEF\tUDID: 00008103-000F00D\tLocation: 0x200000\tName: Test iPad";

/// Device line with no ECID field
pub const NO_ECID_LINE: &str = "Type: iPhone15,2\tUDID: 00008120-001A2B3C\tName: Booting";

/// Relative location of the default build output
pub const BUILD_DIR: &str = "src-tauri/gen/apple/build";
