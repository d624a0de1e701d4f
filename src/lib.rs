pub mod action;
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod pages;
pub mod tui;
pub mod utils;
