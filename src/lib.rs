pub mod config;
pub mod event;
pub mod geometry;
pub mod renderer;
pub mod surface;
#[cfg(windows)]
pub mod win32;
