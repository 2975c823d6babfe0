//! Numeric primitives for SCPN Regolith Core.

pub mod special;
pub mod stencil;
