//! Reusable presentational components.

pub mod steps;
