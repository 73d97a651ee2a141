//! AirGauge library — portable air-quality index engine.
//!
//! This crate contains all index computation, pollutant extraction, and
//! report logic with no platform dependencies, testable on any host with
//! `cargo test`. Platform layers (the ingest backend that queries the
//! time-series store, the dashboard frontend that renders badges and charts)
//! are thin consumers that feed raw readings in and render the results.
//!
//! The library is organized as:
//! - `breakpoints` — pollutant metadata and concentration→sub-index scales
//! - `index` — composite AQI, dominant-pollutant selection, tier
//!   classification with badge tags
//! - `extract` — latest-per-pollutant snapshots from raw reading batches
//! - `aggregate` — fixed-interval averaging for chart series
//! - `cache` — caller-owned TTL cache for refresh results
//! - `protocol` — NDJSON report messages for dashboard consumers
//!
//! Everything is pure and allocation-free: collections are `heapless` or
//! caller-borrowed slices, and time enters only as caller-supplied
//! timestamps.

#![cfg_attr(not(test), no_std)]

pub mod aggregate;
pub mod breakpoints;
pub mod cache;
pub mod extract;
pub mod index;
pub mod protocol;
