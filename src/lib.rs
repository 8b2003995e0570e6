pub mod config;
pub mod content;
pub mod counter;
pub mod effects;
pub mod error;
pub mod form;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod skill_bar;
pub mod state;
pub mod theme;
pub mod toast;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
