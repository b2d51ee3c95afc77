pub mod config;
pub mod presets;
pub mod preview;
pub mod render;
pub mod samples;
pub mod source;
pub mod watch;
