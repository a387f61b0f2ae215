//! Board-agnostic panel logic for the Deltos task panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The task table and its parsing from TASKS payloads
//! - Panel state: selection cursor and rendered display lines
//! - Input trigger handling
//! - The render sink trait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod panel;
pub mod parse;
pub mod sink;
pub mod table;
