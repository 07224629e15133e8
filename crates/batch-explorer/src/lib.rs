//! Batch Explorer - public viewer for sealed commitment batches.
//!
//! A single-screen Dioxus application that fetches the batch list once on
//! mount and renders it as a table. All data handling lives in
//! `batch_explorer_core`; this crate only draws the view model.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature, fetches through the browser
//! - **Desktop**: `desktop` feature, native HTTP client

#![forbid(unsafe_code)]

pub mod components;
