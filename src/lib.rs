//! GPU Text Demo
//!
//! A windowed GPU demo built with Rust, winit, and wgpu.

/// Application - windowing, GPU setup, and the run loop
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Health check system for validating startup prerequisites
pub mod health;

/// Path rendering helpers for the startup banner
pub mod paths;
