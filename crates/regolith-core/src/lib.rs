// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Regolith Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 1-D heat diffusion through a rotating asteroid's regolith slab.
//!
//! Explicit FTCS integrators for oscillating, constant and radiative
//! boundary drives, plus the matching semi-infinite-solid closed forms.

pub mod analytic;
pub mod explicit;
pub mod export;
pub mod radiative;
pub mod solver;

pub use explicit::BoundaryDrive;
pub use solver::{SlabSolution, SlabSolver};
