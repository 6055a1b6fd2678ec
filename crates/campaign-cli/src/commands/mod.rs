//! Command implementations

pub mod check;
pub mod env;
pub mod normalize;
pub mod resolve;

pub use check::run_check;
pub use env::run_env;
pub use normalize::run_normalize;
pub use resolve::run_resolve;
