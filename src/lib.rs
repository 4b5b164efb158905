//! Workshops Library
//!
//! A console unit converter and a product price report.

pub mod build_info;
pub mod cli;
pub mod convert;
pub mod logging;
pub mod models;
pub mod numfmt;
pub mod report;
