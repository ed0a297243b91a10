pub mod app;
pub mod handlers;
pub mod input;
pub mod navigation;
pub mod stats;
pub mod ui;
