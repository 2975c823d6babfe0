// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Analytic
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form semi-infinite-solid references for the numerical runs.
//!
//! Both solutions fill rows 1..Nt and leave the t = 0 row at zero: the
//! erfc profile is singular at t = 0, and the thermal wave keeps the same
//! convention so the two reference fields stay row-aligned with each other
//! and with the numerical fields (whose row 0 is pure boundary/initial
//! data).

use ndarray::Array2;
use regolith_math::special::erfc;
use regolith_types::config::SlabConfig;
use regolith_types::state::SlabGrid;

/// Damped thermal wave driven by a sinusoidal surface temperature:
///
/// T(z, t) = T₀·exp(−k·z)·cos(k·z − ω·t), with k = √(ω/2κ)
///
/// the decay constant and wavenumber of the wave. Valid for a domain deep
/// enough that the far boundary never matters.
pub fn thermal_wave(cfg: &SlabConfig, grid: &SlabGrid) -> Array2<f64> {
    let k = (cfg.omega / (2.0 * cfg.kappa)).sqrt();
    let mut field = Array2::zeros((grid.nt, grid.nz));
    for i in 1..grid.nt {
        let wt = cfg.omega * grid.t[i];
        for (j, &zj) in grid.z.iter().enumerate() {
            field[[i, j]] = cfg.t0 * (-k * zj).exp() * (k * zj - wt).cos();
        }
    }
    field
}

/// Constant-surface-temperature diffusion into a half-space:
///
/// T(z, t) = T₀·erfc(z / (2·√(κ·t)))
///
/// the classic complementary-error-function solution.
pub fn constant_surface(cfg: &SlabConfig, grid: &SlabGrid) -> Array2<f64> {
    let mut field = Array2::zeros((grid.nt, grid.nz));
    for i in 1..grid.nt {
        let spread = 2.0 * (cfg.kappa * grid.t[i]).sqrt();
        for (j, &zj) in grid.z.iter().enumerate() {
            field[[i, j]] = cfg.t0 * erfc(zj / spread);
        }
    }
    field
}
