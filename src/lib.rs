#![no_std]
#![doc = include_str!("../README.md")]

mod chip;
mod define;
mod gic;
mod reg;


pub use chip::IrqChip;
pub use define::{IrqError, SecureGroup, Trigger, TriggerFlags};
pub use gic::Gic;
