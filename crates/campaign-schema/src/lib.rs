//! JSON Schema validation of campaign documents
//!
//! Input may be YAML or JSON. It is normalized to JSON, validated against a
//! JSON Schema, and only then unmarshalled into the target type. Every schema
//! violation, plus any unmarshal failure, is reported together.

pub mod error;
pub mod normalize;
pub mod schema;

pub use error::{Error, Result, Violation};
pub use normalize::normalize;
pub use schema::{Schema, unmarshal_validate};
