// src/lib.rs
//
// Summon-line effect for a trading-card display: randomly bent lines that
// radiate from a card out to the edges of the screen.

pub mod animation;
pub mod config;
pub mod draw;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::{SummonError, SummonResult};
