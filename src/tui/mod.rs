//! Hot-seat terminal front end: both seats play from one keyboard.

pub mod app;
pub mod controller;
pub mod ui;
