//! Terminal front end: rendering, prompts and progress output.

pub mod blocks;
pub mod context;
pub mod error;
pub mod events;
pub mod primitives;
pub mod prompter;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
