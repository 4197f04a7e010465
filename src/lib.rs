//! Consultant Forecast Engine
//!
//! This crate projects a self-employed consultant's year: billable capacity
//! per month after holidays and absences, engagement revenue, employer salary
//! cost under Swedish employment taxes, and the resulting monthly profit.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
