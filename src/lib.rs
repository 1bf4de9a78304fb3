//! Monthly Payroll Calculation Engine
//!
//! This crate turns raw attendance records and per-employee salary data into
//! itemized payroll records and a month summary, applying configurable
//! overtime, tax, insurance and lateness rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
