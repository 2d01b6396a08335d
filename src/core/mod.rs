pub mod app;
pub mod characters;
pub mod config;
pub mod marker;
pub mod paths;
pub mod pipeline;
pub mod render;
pub mod replace;
pub mod token;
pub mod widont;
pub mod wrap;
