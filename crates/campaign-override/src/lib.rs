//! Values in campaign specs that can be overridden for specific repositories.
//!
//! An overridable value is a boolean or string whose effective value depends
//! on the name of the repository it is evaluated for. Documents express it
//! either as a plain scalar, which applies everywhere, or as an ordered list
//! of glob rules:
//!
//! ```yaml
//! published:
//!   - "*": false
//!   - github.com/sourcegraph/*: true
//! ```
//!
//! Rules are evaluated last-to-first, so later entries override earlier ones.
//!
//! Every type here implements `Serialize` and `Deserialize` and works with any
//! self-describing format (JSON, YAML, TOML).

pub mod aggregate;
mod codec;
pub mod error;
pub mod only_except;
pub mod overridable;
pub mod pattern;
pub mod rule;
pub mod string;
pub mod value;

pub use aggregate::{Errors, collect};
pub use error::{Error, Result};
pub use only_except::OnlyExcept;
pub use overridable::{Bool, Overridable, Published};
pub use pattern::{ALL_PATTERN, Pattern};
pub use rule::{Rule, RuleSet};
pub use string::OverridableString;
pub use value::{BoolOrString, OverridableValue};
