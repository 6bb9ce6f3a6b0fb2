pub mod config;
pub mod loading;
pub mod persistence;
pub mod rng;
pub mod ui;
