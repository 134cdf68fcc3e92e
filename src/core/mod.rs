pub mod catalog;
pub mod codec;
pub mod table;

pub use crate::domain::ports::{Ec2Request, Shape, WireEnum};
pub use crate::utils::error::Result;
