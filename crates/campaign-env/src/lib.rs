//! Step environments for campaign specs
//!
//! A step environment declares variables that are either bound to a literal
//! value or copied from the outer environment the executor runs in:
//!
//! ```yaml
//! env:
//!   - GITHUB_TOKEN        # copied from the outer environment
//!   - LANG: en_US.UTF-8   # literal
//! ```
//!
//! The object form (`env: {LANG: en_US.UTF-8}`) is also accepted; it can only
//! express literals.

pub mod environment;
pub mod error;
pub mod variable;

pub use environment::Environment;
pub use error::{Error, Result};
pub use variable::Variable;
