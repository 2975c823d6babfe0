// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Solver facade: one validated configuration and grid, five solutions.

use ndarray::Array2;
use regolith_types::config::SlabConfig;
use regolith_types::error::RegolithResult;
use regolith_types::state::SlabGrid;

use crate::explicit::{self, BoundaryDrive};
use crate::{analytic, radiative};

/// All five output fields of one configuration, each Nt×Nz.
#[derive(Debug, Clone)]
pub struct SlabSolution {
    /// Explicit run, oscillating drive.
    pub oscillating: Array2<f64>,
    /// Explicit run, constant drive.
    pub constant: Array2<f64>,
    /// Explicit run, oscillating drive with radiative surface loss.
    pub radiative: Array2<f64>,
    /// Closed-form damped thermal wave.
    pub thermal_wave: Array2<f64>,
    /// Closed-form erfc profile for the constant drive.
    pub constant_surface: Array2<f64>,
}

/// Owns a validated configuration and its grid; every solve call reads that
/// shared state and returns a freshly allocated field, so repeated calls
/// are independent and reproducible.
#[derive(Debug, Clone)]
pub struct SlabSolver {
    config: SlabConfig,
    grid: SlabGrid,
}

impl SlabSolver {
    /// Validate the configuration and build the grid once.
    pub fn new(config: SlabConfig) -> RegolithResult<Self> {
        config.validate()?;
        let grid = config.create_grid();
        Ok(SlabSolver { config, grid })
    }

    pub fn config(&self) -> &SlabConfig {
        &self.config
    }

    pub fn grid(&self) -> &SlabGrid {
        &self.grid
    }

    /// Explicit FTCS run with the oscillating surface drive.
    pub fn oscillating(&self, drive: BoundaryDrive) -> RegolithResult<Array2<f64>> {
        explicit::oscillating(&self.config, &self.grid, drive)
    }

    /// Explicit FTCS run with the constant surface drive.
    pub fn constant(&self) -> RegolithResult<Array2<f64>> {
        explicit::constant(&self.config, &self.grid)
    }

    /// Explicit FTCS run with oscillating drive and radiative loss.
    pub fn radiative(&self, drive: BoundaryDrive) -> RegolithResult<Array2<f64>> {
        radiative::radiative(&self.config, &self.grid, drive)
    }

    /// Closed-form damped thermal wave.
    pub fn thermal_wave(&self) -> Array2<f64> {
        analytic::thermal_wave(&self.config, &self.grid)
    }

    /// Closed-form erfc solution for the constant drive.
    pub fn constant_surface(&self) -> Array2<f64> {
        analytic::constant_surface(&self.config, &self.grid)
    }

    /// Run every solver and collect the five fields.
    pub fn solve_all(&self, drive: BoundaryDrive) -> RegolithResult<SlabSolution> {
        Ok(SlabSolution {
            oscillating: self.oscillating(drive)?,
            constant: self.constant()?,
            radiative: self.radiative(drive)?,
            thermal_wave: self.thermal_wave(),
            constant_surface: self.constant_surface(),
        })
    }
}
