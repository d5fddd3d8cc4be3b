//! Declarative scene input and tabular field output.
//!
//! The engine itself is file-format agnostic; this module supplies the two
//! formats the tooling speaks: a TOML scene description listing charged
//! bodies, and a CSV export of field and potential samples over a uniform
//! rectangular grid.

pub mod grid;
pub mod scene_file;
