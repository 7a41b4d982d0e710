mod basis_engine;

pub use basis_engine::{CostBasisEngine, RunOutcome};
