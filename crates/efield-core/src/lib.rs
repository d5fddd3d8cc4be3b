//! # efield Core Library
//!
//! A library for computing the electric field and scalar potential produced by a
//! scene of charged two-dimensional primitives: point charges, finite charged
//! segments, infinite charged sheets, and uniformly charged triangular plates.
//!
//! ## Architectural Philosophy
//!
//! Every source geometry answers the same two questions, `field_at(point)` and
//! `voltage_at(point)`, with a closed-form analytic formula evaluated in its own
//! local frame. A [`core::models::scene::Scene`] aggregates any number of sources
//! and answers the same questions by superposition. All queries are pure functions
//! of the current scene state; there is no caching and no shared mutable state.
//!
//! The library is organized into focused layers:
//!
//! - **[`core::geometry`]** - planar vector helpers (projection, rotation) on top
//!   of nalgebra's 2D types.
//! - **[`core::field`]** - the pure closed-form field and potential kernels,
//!   including the triangular-plate potential antiderivatives.
//! - **[`core::models`]** - the charge geometries, their coordinate transforms,
//!   the polymorphic [`core::models::body::Body`] contract, and the scene
//!   aggregator.
//! - **[`core::io`]** - declarative TOML scene descriptions and CSV export of
//!   sampled field grids.

pub mod core;
