//! # Charge Models Module
//!
//! This module contains the charge geometries and the scene aggregator that
//! together form the query surface of the library.
//!
//! ## Overview
//!
//! Each geometry stores its world placement (position, rotation), its charge
//! parameter, and a mass used only by external motion integrators. Each answers
//! `field_at` and `voltage_at` by transforming the query point into its local
//! frame and delegating to the closed-form kernels in [`crate::core::field`].
//!
//! ## Key Components
//!
//! - [`point`] - discrete point charge (Coulomb kernel)
//! - [`line`] - uniformly charged finite segment
//! - [`plane`] - uniformly charged infinite sheet
//! - [`triangle`] - uniformly charged triangular plate, with normalization,
//!   containment tests, and point-charge decomposition
//! - [`body`] - the tagged-variant polymorphic contract over all geometries,
//!   plus the generic property access surface
//! - [`scene`] - owned collection of bodies answering queries by superposition
//! - [`ids`] - slotmap key type for bodies owned by a scene

pub mod body;
pub mod ids;
pub mod line;
pub mod plane;
pub mod point;
pub mod scene;
pub mod triangle;
