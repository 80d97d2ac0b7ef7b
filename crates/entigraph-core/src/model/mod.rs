//! Resolved metadata model.
//!
//! These are the shapes storage backends consume. They are built by
//! `resolve` during bootstrap and never mutated once a registry is
//! published.

pub mod application;
pub mod column;
pub mod entity;
pub mod index;
pub mod relation;
