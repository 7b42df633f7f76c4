pub mod config;
pub mod logging;

pub mod cgi;
pub mod loader;
pub mod project;
pub mod render;
