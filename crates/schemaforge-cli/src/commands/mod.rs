//! Command handlers.
//!
//! Each handler translates parsed arguments and configuration into adapter
//! instances, calls one core service, and prints the outcome. No business
//! logic lives here.

pub mod generate;
pub mod register;
