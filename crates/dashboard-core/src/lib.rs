//! dashboard-core — shared library for the hacker dashboard.
//!
//! Holds the application state, the scan and brute-force simulations,
//! decorative animation, flat-file persistence and result reporting used
//! by both the GUI and CLI frontends.

pub mod address;
pub mod animation;
pub mod bruteforce;
pub mod cipher;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod report;
pub mod scan;
pub mod store;
