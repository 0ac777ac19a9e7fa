//! Project descriptor readers

mod tauri;

pub use tauri::TauriConfigReader;
