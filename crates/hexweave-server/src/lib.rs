//! HTTP facade for the Hexweave lattice engine.
//!
//! A thin axum transport around one process-wide [`Lattice`]: three JSON
//! endpoints (`/state`, `/scramble`, `/reset`) plus an embedded static
//! index. The engine is synchronous and its operations are short, so a
//! single exclusive lock covers every call; requests are totally ordered
//! by lock acquisition and no handler can observe a half-applied swap.
//!
//! Out-of-domain request parameters are coerced, never rejected: sizes
//! clamp to the supported range, unknown patterns fall back to
//! `vertical`, and negative step counts count as zero. Malformed bodies
//! fall back to defaults the same way the legacy service treated a
//! missing JSON payload.
//!
//! [`Lattice`]: hexweave_lattice::Lattice

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;

pub use api::{build_router, SharedLattice};
pub use config::ServerConfig;
