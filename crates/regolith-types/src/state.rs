// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

use crate::config::SlabConfig;

/// Space/time grid with precomputed coordinates and derived scalars.
///
/// Both dimensional and non-dimensional copies of each axis are retained:
/// the dimensional axes carry the configured spacing and cover the half-open
/// interval `[0, extent)`; the non-dimensional axes are `linspace` rescalings
/// over the same point counts. Built once at solver construction, never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SlabGrid {
    /// Number of spatial points.
    pub nz: usize,
    /// Number of time points.
    pub nt: usize,
    /// Dimensional depth axis (m), spacing `dz`, covering [0, zp·zc).
    pub z: Array1<f64>,
    /// Non-dimensional depth axis, linspace(0, zp, nz).
    pub zeta: Array1<f64>,
    /// Spatial step (m).
    pub dz: f64,
    /// Non-dimensional spatial step dz/zc.
    pub dzeta: f64,
    /// Dimensional time axis (s), spacing `dt`, covering [0, tp·tc).
    pub t: Array1<f64>,
    /// Non-dimensional time axis, linspace(0, tp, nt).
    pub tau: Array1<f64>,
    /// Time step dt = cf·dz²/(2κ) (s), sized by the CFL condition.
    pub dt: f64,
    /// Non-dimensional time step dt/tc.
    pub dtau: f64,
    /// Thermal diffusion time constant tc = zc²/κ (s).
    pub tc: f64,
    /// Non-dimensional angular frequency ω·tc.
    pub omega_nd: f64,
    /// Diffusion number r = κ·dt/dz²; ≤ 0.5 for any validated config.
    pub r: f64,
    /// Radiative loss coefficient d = μκ/k_th.
    pub d: f64,
}

impl SlabGrid {
    /// Build the grid from a configuration.
    ///
    /// Point counts follow half-open `arange` semantics on the dimensional
    /// axes: nz = ceil(zp·zc/dz), nt = ceil(tp·tc/dt). The configuration is
    /// trusted here; `SlabConfig::validate` is the gate for degenerate input.
    pub fn new(cfg: &SlabConfig) -> Self {
        let z_stop = cfg.z_extent * cfg.z_scale;
        let nz = (z_stop / cfg.dz).ceil() as usize;
        let z = Array1::from_shape_fn(nz, |i| i as f64 * cfg.dz);
        let zeta = Array1::linspace(0.0, cfg.z_extent, nz);

        let tc = cfg.z_scale * cfg.z_scale / cfg.kappa;
        let dt = cfg.cfl * cfg.dz * cfg.dz / (2.0 * cfg.kappa);
        let nt = (cfg.t_extent * tc / dt).ceil() as usize;
        let t = Array1::from_shape_fn(nt, |i| i as f64 * dt);
        let tau = Array1::linspace(0.0, cfg.t_extent, nt);

        SlabGrid {
            nz,
            nt,
            z,
            zeta,
            dz: cfg.dz,
            dzeta: cfg.dz / cfg.z_scale,
            t,
            tau,
            dt,
            dtau: dt / tc,
            tc,
            omega_nd: cfg.omega * tc,
            r: cfg.kappa * dt / (cfg.dz * cfg.dz),
            d: cfg.mu * cfg.kappa / cfg.k_th,
        }
    }
}
