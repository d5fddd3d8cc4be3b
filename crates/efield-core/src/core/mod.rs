//! # Core Module
//!
//! This module provides the computational core of the library: planar geometry
//! helpers, the analytic field and potential kernels, the charge geometry models,
//! and the scene file / grid export utilities.
//!
//! ## Architecture
//!
//! - **Planar Geometry** ([`geometry`]) - projections, rotations, and segment
//!   distances for nalgebra's 2D vectors
//! - **Analytic Kernels** ([`field`]) - stateless closed-form formulas for each
//!   source geometry
//! - **Charge Models** ([`models`]) - the geometry types, their local-frame
//!   transforms, and the scene aggregator
//! - **File I/O** ([`io`]) - TOML scene descriptions and CSV field-grid export
//!
//! ## Numerical Contract
//!
//! Query points on degenerate loci (the axis of a charged segment, a triangle
//! edge extension, a zero-area triangle) produce non-finite results. These are
//! documented properties of the closed-form formulas; they are passed through
//! unchanged, never clamped and never reported as errors.

pub mod field;
pub mod geometry;
pub mod io;
pub mod models;
