//! Billing Calculator for medical notes
//!
//! This crate turns a clinician-entered time range into a billable number of
//! calls for a progress note or consult, and flags ranges that are a few
//! minutes short of a better tier or start off the half-hour.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
