// EC2 shapes grouped by service area. Everything is re-exported flat, the way
// callers refer to shapes by their EC2 names.

pub mod common;
pub mod enums;
pub mod instances;
pub mod security_groups;
pub mod tags;
pub mod volumes;
pub mod vpc;

pub use common::*;
pub use enums::*;
pub use instances::*;
pub use security_groups::*;
pub use tags::*;
pub use volumes::*;
pub use vpc::*;
