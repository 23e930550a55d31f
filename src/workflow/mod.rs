pub mod subproblem_ctx;
pub mod subproblem_flow;

pub use subproblem_ctx::SubproblemCtx;
pub use subproblem_flow::{SubproblemFlow, SubproblemOutcome};
