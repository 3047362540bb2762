pub mod config;
pub mod errors;
pub mod messages;
pub mod period;
pub mod render;
pub mod template;
pub mod transition;
pub mod view;
pub mod workflow;
