//! Client-side board mirror and drag reconciliation.
//!
//! The server exposes three narrow primitives (`move`, `reorder tasks`,
//! `reorder columns`) instead of a single "set the whole board" endpoint.
//! This crate diffs before/after board snapshots produced by a drag
//! gesture and issues the minimal call sequence that converges server
//! state, then refetches the board as the single source of truth.

pub mod engine;
pub mod snapshot;
pub mod transport;
