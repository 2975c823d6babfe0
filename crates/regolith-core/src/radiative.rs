// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Radiative
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Oscillating-drive integrator with a quartic radiative surface loss.
//!
//! The surface can shed heat to its surroundings through a
//! Stefan–Boltzmann-like term with coefficient d = μκ/k_th. The two drive
//! modes apply the correction differently and are kept as distinct,
//! documented behaviors:
//!
//! - [`BoundaryDrive::Double`]: both faces carry the oscillating drive. A
//!   face is overridden only when its prescribed value is cooler than the
//!   adjacent interior cell, with `T_face = T_in − d·(T_in⁴ − T_face⁴)`.
//! - [`BoundaryDrive::Single`]: the left face carries the drive; the far
//!   face is rewritten unconditionally every step as
//!   `T_face = T_in − d·T_in⁴`, with no comparison against a drive.

use ndarray::Array2;
use regolith_math::stencil::diffuse_interior;
use regolith_types::config::SlabConfig;
use regolith_types::error::{RegolithError, RegolithResult};
use regolith_types::state::SlabGrid;

use crate::explicit::BoundaryDrive;

/// Temperature evolution with diffusion plus radiative boundary loss.
///
/// Returns a freshly allocated Nt×Nz field. The radiative override for a
/// step uses that step's freshly swept interior values.
pub fn radiative(
    cfg: &SlabConfig,
    grid: &SlabGrid,
    drive: BoundaryDrive,
) -> RegolithResult<Array2<f64>> {
    let (nt, nz) = (grid.nt, grid.nz);
    let mut field = Array2::zeros((nt, nz));
    for i in 0..nt {
        let surface = cfg.t0 * (cfg.omega * grid.t[i]).cos();
        field[[i, 0]] = surface;
        if drive == BoundaryDrive::Double {
            field[[i, nz - 1]] = -surface;
        }
    }

    let d = grid.d;
    for i in 1..nt {
        let prev = field.row(i - 1).to_owned();
        diffuse_interior(prev.view(), field.row_mut(i), grid.r);

        match drive {
            BoundaryDrive::Double => {
                // A face cooler than the cell beneath it radiates instead of
                // tracking the drive; evaluated per face, far face first.
                let inner = field[[i, nz - 2]];
                if field[[i, nz - 1]] < inner {
                    field[[i, nz - 1]] =
                        inner - d * (inner.powi(4) - field[[i, nz - 1]].powi(4));
                }
                let inner = field[[i, 1]];
                if field[[i, 0]] < inner {
                    field[[i, 0]] = inner - d * (inner.powi(4) - field[[i, 0]].powi(4));
                }
            }
            BoundaryDrive::Single => {
                let inner = field[[i, nz - 2]];
                field[[i, nz - 1]] = inner - d * inner.powi(4);
            }
        }

        if field.row(i).iter().any(|v| !v.is_finite()) {
            return Err(RegolithError::SolverDiverged {
                step: i,
                message: "radiative integrator produced a non-finite value".to_string(),
            });
        }
    }
    Ok(field)
}
