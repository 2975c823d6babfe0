// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Stencil
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Forward-time, centered-space (FTCS) update for the 1-D heat equation.

use ndarray::{ArrayView1, ArrayViewMut1};

/// One explicit Euler step of ∂T/∂t = κ·∂²T/∂z² over the interior points.
///
/// Writes `next[j] = prev[j] + r·(prev[j+1] − 2·prev[j] + prev[j−1])` for
/// `j = 1..n−1`, where `r = κ·dt/dz²` is the diffusion number. The two
/// endpoint entries of `next` are left untouched; boundary conditions are
/// the caller's responsibility. Stable for `r ≤ 0.5`.
pub fn diffuse_interior(prev: ArrayView1<'_, f64>, mut next: ArrayViewMut1<'_, f64>, r: f64) {
    let n = prev.len();
    debug_assert_eq!(n, next.len(), "row length mismatch");
    for j in 1..n.saturating_sub(1) {
        next[j] = prev[j] + r * (prev[j + 1] - 2.0 * prev[j] + prev[j - 1]);
    }
}
