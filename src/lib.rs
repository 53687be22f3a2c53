//! # PFT Rust Backend
//!
//! Analytics engine for the Political Freedom & Terrorism dashboard.
//!
//! This crate joins a political-freedom dataset (Freedom House PR/CL ratings)
//! with a terrorism-incident dataset, clusters country-year observations into
//! five qualitative profiles, and serves the chart data consumed by the
//! dashboard frontend. The frontend is an external collaborator: it renders
//! the four linked views (cluster scatter, cluster sizes, country timeline,
//! incident distributions) from the JSON API exposed here.
//!
//! ## Architecture
//!
//! - [`io`]: CSV ingestion of the merged dataset and content fingerprinting
//! - [`preprocessing`]: column selection, incomplete-row removal, z-score
//!   standardization
//! - [`algorithms`]: seeded k-means clustering and centroid-rank label
//!   derivation
//! - [`transformations`]: year-range and per-country filtering
//! - [`services`]: chart-facing data assembly (one module per view)
//! - [`dataset`]: memoized load-prepare-cluster pipeline keyed on
//!   (file checksum, seed, cluster count)
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! ## Pipeline
//!
//! The full pipeline runs once per dataset load. Filter-driven requests only
//! re-run the filter engine and service assembly over the cached, read-only
//! labeled dataset.

pub mod api;

pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod io;
pub mod models;
pub mod preprocessing;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;
