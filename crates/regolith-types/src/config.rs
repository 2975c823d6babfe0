// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{RegolithError, RegolithResult};

/// Slab solver configuration.
///
/// JSON keys keep the legacy parameter names (`zp`, `dz`, `zc`, `cf`, `tp`,
/// `kappa`, `omegap`, `T0`, `mu`, `k_th`) so existing config files and the
/// plotting front end keep working unchanged.
///
/// Immutable once a solver is constructed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabConfig {
    /// Non-dimensional total slab depth, in units of `z_scale`.
    #[serde(rename = "zp")]
    pub z_extent: f64,
    /// Dimensional spatial step (m).
    pub dz: f64,
    /// Characteristic length scale for non-dimensionalization (m).
    #[serde(rename = "zc")]
    pub z_scale: f64,
    /// CFL fraction in (0, 1]; the time step is dt = cf·dz²/(2κ), so the
    /// diffusion number is identically r = cf/2.
    #[serde(rename = "cf")]
    pub cfl: f64,
    /// Non-dimensional run duration, in units of tc = zc²/κ.
    #[serde(rename = "tp")]
    pub t_extent: f64,
    /// Thermal diffusivity κ (m²/s).
    pub kappa: f64,
    /// Angular frequency of the oscillating surface drive (rad/s).
    #[serde(rename = "omegap")]
    pub omega: f64,
    /// Surface temperature amplitude T₀ (K).
    #[serde(rename = "T0")]
    pub t0: f64,
    /// Material constant entering the radiative loss coefficient d = μκ/k_th.
    pub mu: f64,
    /// Thermal conductivity k_th (W/(m·K)).
    pub k_th: f64,
}

impl Default for SlabConfig {
    fn default() -> Self {
        SlabConfig {
            z_extent: constants::DEFAULT_Z_EXTENT,
            dz: constants::DEFAULT_DZ,
            z_scale: constants::DEFAULT_Z_SCALE,
            cfl: constants::DEFAULT_CFL,
            t_extent: constants::DEFAULT_T_EXTENT,
            kappa: constants::DEFAULT_KAPPA,
            omega: constants::DEFAULT_OMEGA,
            t0: constants::DEFAULT_T0,
            mu: constants::DEFAULT_MU,
            k_th: constants::DEFAULT_K_TH,
        }
    }
}

impl SlabConfig {
    /// Load from a JSON file with the legacy key names.
    pub fn from_file(path: &str) -> RegolithResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Fail-fast parameter validation.
    ///
    /// Rejects non-finite or non-positive parameters, CFL fractions above 1
    /// (the unstable regime of the explicit scheme), and step/extent
    /// combinations that would resolve fewer than 2 grid points on either
    /// axis.
    pub fn validate(&self) -> RegolithResult<()> {
        let fields = [
            ("zp", self.z_extent),
            ("dz", self.dz),
            ("zc", self.z_scale),
            ("cf", self.cfl),
            ("tp", self.t_extent),
            ("kappa", self.kappa),
            ("omegap", self.omega),
            ("T0", self.t0),
            ("mu", self.mu),
            ("k_th", self.k_th),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(RegolithError::Config(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if self.cfl > 1.0 {
            return Err(RegolithError::UnstableScheme {
                cfl: self.cfl,
                r: self.cfl / 2.0,
            });
        }
        let nz = (self.z_extent * self.z_scale / self.dz).ceil() as usize;
        if nz < 2 {
            return Err(RegolithError::Config(format!(
                "spatial step dz = {} resolves only {nz} point(s) across the slab; need at least 2",
                self.dz
            )));
        }
        let tc = self.z_scale * self.z_scale / self.kappa;
        let dt = self.cfl * self.dz * self.dz / (2.0 * self.kappa);
        let nt = (self.t_extent * tc / dt).ceil() as usize;
        if nt < 2 {
            return Err(RegolithError::Config(format!(
                "run duration tp = {} resolves only {nt} time step(s); need at least 2",
                self.t_extent
            )));
        }
        Ok(())
    }

    /// Build the space/time grid for this configuration.
    ///
    /// Call `validate()` first; degenerate inputs produce degenerate grids.
    pub fn create_grid(&self) -> crate::state::SlabGrid {
        crate::state::SlabGrid::new(self)
    }
}
