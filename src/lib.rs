//! Work-day hour and overtime engine for vehicle rental budgets and services
//!
//! This crate computes, for each calendar day of a vehicle booking, how long the
//! vehicle was in use and how many overtime hours are billable beyond the
//! contracted day, and keeps those figures consistent as times are edited.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
