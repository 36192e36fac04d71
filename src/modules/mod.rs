//! Modules layer - Infrastructure components shared by the features
//!
//! Contains the persistence gateway: repositories for PostgreSQL and memory,
//! and the delete-time reference guard.

pub mod persistence;
