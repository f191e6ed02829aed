//! Duty Roster Engine
//!
//! This crate generates cyclic duty rosters for a small patrol unit over
//! payroll periods running from the 26th of one month to the 25th of the
//! next, and derives the overtime, meal allowance and daily strength figures
//! that go with them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
