use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegolithError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unstable explicit scheme: CFL fraction {cfl} gives diffusion number r = {r} > 0.5")]
    UnstableScheme { cfl: f64, r: f64 },

    #[error("solver produced a non-finite temperature at time step {step}: {message}")]
    SolverDiverged { step: usize, message: String },

    #[error("field export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RegolithResult<T> = Result<T, RegolithError>;
