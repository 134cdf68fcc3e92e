//! Typed model layer for the AWS EC2 API: request, result and value shapes
//! plus the closed string enumerations they reference.

pub mod core;
pub mod domain;
pub mod model;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::core::catalog;
pub use crate::core::codec::{decode_as, DynShape, InputFormat};
pub use crate::domain::ports::{Ec2Request, Shape, WireEnum};
pub use crate::utils::error::{ModelError, Result};

/// Traits needed to call shape and enum methods generically.
pub mod prelude {
    pub use crate::domain::ports::{Ec2Request, Shape, WireEnum};
    pub use crate::utils::validation::Validate;
}
