//! # Field Module
//!
//! Stateless closed-form formulas for the electric field and scalar potential of
//! the supported charge geometries. Each kernel is a pure function of local-frame
//! coordinates; the geometry models in [`crate::core::models`] perform the
//! world-to-local transforms and delegate here.
//!
//! Singularities of the formulas (query points on a segment's axis, on a triangle
//! edge extension, coincident with a point charge) produce non-finite values by
//! contract; the kernels never clamp.

pub mod kernels;
