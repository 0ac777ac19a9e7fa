//! Operator checklist
//!
//! Installing through `cfgutil` needs a few one-time manual steps that this
//! tool cannot check for. The operator confirms them before anything runs.

use crate::domain::ports::ConfirmRequest;

pub const TITLE: &str = "Before starting";

pub const CHECKLIST: &[&str] = &[
    "To send an IPA file to a connected device from a Mac, this tool drives",
    "cfgutil, the command-line tool of Apple Configurator 2.",
    "",
    "- Download \"Apple Configurator 2\" from the Mac App Store and install it.",
    "- Your device must be registered in your Apple Developer account and",
    "  properly provisioned.",
    "- Enable the command-line tools: open Apple Configurator 2, then in the",
    "  menu bar choose \"Apple Configurator 2\" > \"Install Automation Tools...\"",
    "  and follow the prompts.",
    "- Connect your iOS device to your Mac with a USB cable.",
    "- If prompted on the device, choose to trust the computer.",
];

pub const QUESTION: &str = "Have you completed the steps above?";

pub fn confirm_request() -> ConfirmRequest<'static> {
    ConfirmRequest {
        title: TITLE,
        lines: CHECKLIST,
        question: QUESTION,
    }
}
