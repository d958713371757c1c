//! Core types for probdist.
//!
//! - [`Error`] / [`Result`]: the error taxonomy shared by every crate
//! - [`Distribution`], [`Combine`], [`DataBacked`]: capability traits
//! - [`Dataset`], [`SampleMode`]: value types consumed by constructors

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Combine, DataBacked, Distribution};
pub use types::{Dataset, SampleMode};
