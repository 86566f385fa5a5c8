pub mod app;
pub mod dom;
pub mod effects;
pub mod snapshot;
pub mod timers;
pub mod ui;
