//! Explicit FTCS integrators for Dirichlet-driven slabs.
//!
//! Forward-Euler in time, central-difference in space, on the fixed grid
//! built at solver construction. Stability (r ≤ 0.5) is guaranteed by the
//! CFL-derived time step of any validated configuration.

use ndarray::Array2;
use regolith_math::stencil::diffuse_interior;
use regolith_types::config::SlabConfig;
use regolith_types::error::{RegolithError, RegolithResult};
use regolith_types::state::SlabGrid;

/// Boundary drive selection for the oscillating integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDrive {
    /// Both faces driven: T(t, 0) = T₀·cos(ωt), T(t, L) = −T₀·cos(ωt).
    Double,
    /// Left face driven only; the far face stays at 0 (Dirichlet).
    Single,
}

impl Default for BoundaryDrive {
    fn default() -> Self {
        BoundaryDrive::Double
    }
}

/// March every row after the first: sweep the interior from the previous
/// row and verify the result stayed finite.
fn march(field: &mut Array2<f64>, r: f64, what: &str) -> RegolithResult<()> {
    let nt = field.nrows();
    for i in 1..nt {
        let prev = field.row(i - 1).to_owned();
        diffuse_interior(prev.view(), field.row_mut(i), r);
        if field.row(i).iter().any(|v| !v.is_finite()) {
            return Err(RegolithError::SolverDiverged {
                step: i,
                message: format!("{what} integrator produced a non-finite interior value"),
            });
        }
    }
    Ok(())
}

/// Temperature evolution under an oscillating surface drive.
///
/// Boundary conditions:
/// - T(t, z=0) = T₀·cos(ωt)
/// - T(t, z=L) = −T₀·cos(ωt) for [`BoundaryDrive::Double`], 0 for
///   [`BoundaryDrive::Single`]
///
/// Returns a freshly allocated Nt×Nz field, row i holding the profile at
/// time t[i]. Row 0 is pure boundary/initial data (interior starts at 0).
pub fn oscillating(
    cfg: &SlabConfig,
    grid: &SlabGrid,
    drive: BoundaryDrive,
) -> RegolithResult<Array2<f64>> {
    let mut field = Array2::zeros((grid.nt, grid.nz));
    for i in 0..grid.nt {
        let surface = cfg.t0 * (cfg.omega * grid.t[i]).cos();
        field[[i, 0]] = surface;
        if drive == BoundaryDrive::Double {
            field[[i, grid.nz - 1]] = -surface;
        }
    }
    march(&mut field, grid.r, "oscillating")?;
    Ok(field)
}

/// Temperature evolution under a constant surface drive.
///
/// T(t, z=0) = T₀, T(t, z=L) = 0. The far face is satisfied by the zero
/// initialization and never written again.
pub fn constant(cfg: &SlabConfig, grid: &SlabGrid) -> RegolithResult<Array2<f64>> {
    let mut field = Array2::zeros((grid.nt, grid.nz));
    for i in 0..grid.nt {
        field[[i, 0]] = cfg.t0;
    }
    march(&mut field, grid.r, "constant")?;
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SlabConfig {
        SlabConfig {
            dz: 0.05,
            t_extent: 0.05,
            ..Default::default()
        }
    }

    #[test]
    fn test_oscillating_boundary_columns_double() {
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = oscillating(&cfg, &grid, BoundaryDrive::Double).unwrap();
        assert_eq!(field.shape(), &[grid.nt, grid.nz]);
        for i in 0..grid.nt {
            let surface = cfg.t0 * (cfg.omega * grid.t[i]).cos();
            assert!(
                (field[[i, 0]] - surface).abs() < 1e-12,
                "left boundary off at step {i}"
            );
            assert!(
                (field[[i, grid.nz - 1]] + surface).abs() < 1e-12,
                "right boundary off at step {i}"
            );
        }
    }

    #[test]
    fn test_oscillating_boundary_columns_single() {
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = oscillating(&cfg, &grid, BoundaryDrive::Single).unwrap();
        for i in 0..grid.nt {
            assert_eq!(
                field[[i, grid.nz - 1]],
                0.0,
                "far face must stay at zero, step {i}"
            );
        }
    }

    #[test]
    fn test_initial_interior_is_zero() {
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = oscillating(&cfg, &grid, BoundaryDrive::Double).unwrap();
        for j in 1..grid.nz - 1 {
            assert_eq!(field[[0, j]], 0.0, "row 0 interior must start cold at {j}");
        }
    }

    #[test]
    fn test_double_drive_is_odd_symmetric() {
        // Antisymmetric boundaries and a zero interior stay antisymmetric
        // under the centered stencil, to the last bit.
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = oscillating(&cfg, &grid, BoundaryDrive::Double).unwrap();
        for i in 0..grid.nt {
            for j in 0..grid.nz {
                let mirror = field[[i, grid.nz - 1 - j]];
                assert!(
                    (field[[i, j]] + mirror).abs() < 1e-9,
                    "odd symmetry broken at ({i}, {j}): {} vs {}",
                    field[[i, j]],
                    mirror
                );
            }
        }
    }

    #[test]
    fn test_constant_boundary_columns() {
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = constant(&cfg, &grid).unwrap();
        for i in 0..grid.nt {
            assert_eq!(field[[i, 0]], cfg.t0, "left boundary must hold T0");
            assert_eq!(field[[i, grid.nz - 1]], 0.0, "right boundary must hold 0");
        }
    }

    #[test]
    fn test_constant_drive_approaches_linear_steady_state() {
        // After ~a diffusion time the profile is the straight line between
        // the two held faces.
        let cfg = SlabConfig {
            dz: 0.05,
            t_extent: 1.0,
            ..Default::default()
        };
        let grid = cfg.create_grid();
        let field = constant(&cfg, &grid).unwrap();
        let last = grid.nt - 1;
        let z_right = grid.z[grid.nz - 1];
        for j in 0..grid.nz {
            let expected = cfg.t0 * (1.0 - grid.z[j] / z_right);
            assert!(
                (field[[last, j]] - expected).abs() < 0.1,
                "steady profile off at {j}: {} vs {expected}",
                field[[last, j]]
            );
        }
    }

    #[test]
    fn test_interior_never_exceeds_drive_amplitude() {
        let cfg = small_config();
        let grid = cfg.create_grid();
        let field = oscillating(&cfg, &grid, BoundaryDrive::Double).unwrap();
        for v in field.iter() {
            assert!(
                v.abs() <= cfg.t0 + 1e-9,
                "maximum principle violated: {v}"
            );
        }
    }
}
