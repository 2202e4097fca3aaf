#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

pub mod hl;
pub mod ll;

pub use hl::{Address, Config, Error, Lm75bd, Temperature};
