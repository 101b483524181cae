pub mod ask;
pub mod examples;
pub mod health;
pub mod tables;
pub mod tui;
