//! Two-level side-scrolling platformer library crate.

pub mod app;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod geometry;
pub mod input;
pub mod level;
pub mod platform;
pub mod render;
