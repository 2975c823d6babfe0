// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Stability bound on the diffusion number r = κ·dt/dz² for the explicit
/// (forward-Euler, central-difference) scheme in 1-D.
pub const MAX_DIFFUSION_NUMBER: f64 = 0.5;

/// Default non-dimensional slab depth (zp).
pub const DEFAULT_Z_EXTENT: f64 = 1.0;

/// Default dimensional spatial step (m).
pub const DEFAULT_DZ: f64 = 0.01;

/// Default characteristic length scale (m).
pub const DEFAULT_Z_SCALE: f64 = 1.0;

/// Default CFL fraction; dt = cf·dz²/(2κ), so r = cf/2.
pub const DEFAULT_CFL: f64 = 0.5;

/// Default non-dimensional run duration (tp), in units of tc = zc²/κ.
pub const DEFAULT_T_EXTENT: f64 = 1.0;

/// Default thermal diffusivity (m²/s).
pub const DEFAULT_KAPPA: f64 = 1.0;

/// Default angular frequency of the surface drive (rad/s):
/// one full rotation per diffusion time.
pub const DEFAULT_OMEGA: f64 = std::f64::consts::TAU;

/// Default surface temperature amplitude (K).
pub const DEFAULT_T0: f64 = 100.0;

/// Default material constant entering the radiative loss coefficient.
pub const DEFAULT_MU: f64 = 1.0;

/// Default thermal conductivity (W/(m·K)).
pub const DEFAULT_K_TH: f64 = 1.0;
