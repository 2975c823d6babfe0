// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! NPZ export of grids and solved fields for the plotting front end.

use std::fs::File;
use std::path::Path;

use ndarray_npy::NpzWriter;
use regolith_types::error::{RegolithError, RegolithResult};
use regolith_types::state::SlabGrid;

use crate::solver::SlabSolution;

/// Write both grid axes (dimensional and non-dimensional) and all five
/// fields into a single `.npz` archive readable with `numpy.load`.
pub fn write_npz(path: &Path, grid: &SlabGrid, solution: &SlabSolution) -> RegolithResult<()> {
    let file = File::create(path)?;
    let mut npz = NpzWriter::new(file);

    npz.add_array("z", &grid.z).map_err(|e| wrap("z", e))?;
    npz.add_array("zeta", &grid.zeta).map_err(|e| wrap("zeta", e))?;
    npz.add_array("t", &grid.t).map_err(|e| wrap("t", e))?;
    npz.add_array("tau", &grid.tau).map_err(|e| wrap("tau", e))?;

    npz.add_array("oscillating", &solution.oscillating)
        .map_err(|e| wrap("oscillating", e))?;
    npz.add_array("constant", &solution.constant)
        .map_err(|e| wrap("constant", e))?;
    npz.add_array("radiative", &solution.radiative)
        .map_err(|e| wrap("radiative", e))?;
    npz.add_array("thermal_wave", &solution.thermal_wave)
        .map_err(|e| wrap("thermal_wave", e))?;
    npz.add_array("constant_surface", &solution.constant_surface)
        .map_err(|e| wrap("constant_surface", e))?;

    npz.finish().map_err(|e| wrap("archive", e))?;
    Ok(())
}

fn wrap(name: &str, e: ndarray_npy::WriteNpzError) -> RegolithError {
    RegolithError::Export(format!("failed to write '{name}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit::BoundaryDrive;
    use crate::solver::SlabSolver;
    use ndarray::{Array1, Array2};
    use ndarray_npy::NpzReader;
    use regolith_types::config::SlabConfig;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn read_array1(npz: &mut NpzReader<File>, key: &str) -> Array1<f64> {
        npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(&format!("{key}.npy"))
            .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(key))
            .unwrap_or_else(|e| panic!("failed to read {key}: {e}"))
    }

    fn read_array2(npz: &mut NpzReader<File>, key: &str) -> Array2<f64> {
        npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix2>(&format!("{key}.npy"))
            .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix2>(key))
            .unwrap_or_else(|e| panic!("failed to read {key}: {e}"))
    }

    #[test]
    fn test_npz_roundtrip() {
        let solver = SlabSolver::new(SlabConfig {
            dz: 0.1,
            t_extent: 0.02,
            mu: 1e-12,
            ..Default::default()
        })
        .unwrap();
        let solution = solver.solve_all(BoundaryDrive::Double).unwrap();

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("regolith_fields_{stamp}.npz"));

        write_npz(&path, solver.grid(), &solution).expect("export must succeed");

        let mut npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
        let z = read_array1(&mut npz, "z");
        let oscillating = read_array2(&mut npz, "oscillating");
        assert_eq!(z, solver.grid().z);
        assert_eq!(oscillating, solution.oscillating);

        std::fs::remove_file(&path).ok();
    }
}
