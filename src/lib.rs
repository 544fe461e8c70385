//! Wage supplement and sick-leave apportionment engine.
//!
//! This crate turns shift time ranges into auditable cost breakdowns (base pay
//! plus night, evening, weekend and holiday supplements) and splits sick-leave
//! spans between employer-paid and NAV-paid days inside a payroll period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
