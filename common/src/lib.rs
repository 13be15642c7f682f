#![cfg_attr(target_os = "none", no_std)]

mod assign_resources;
mod fmt;

pub mod hal;
pub mod led;
pub mod monitor;
pub mod types;
pub mod utils;
