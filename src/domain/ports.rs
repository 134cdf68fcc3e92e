use crate::utils::error::{ModelError, Result};
use std::fmt;

/// An EC2 API data structure: request, result or nested value.
pub trait Shape: Clone + Default + PartialEq + fmt::Debug + fmt::Display {
    /// The EC2 shape name, e.g. `DescribeInstancesRequest`.
    const SHAPE_NAME: &'static str;
}

/// A closed set of EC2 wire strings.
///
/// Implementations come from `wire_enum!`; only the table is generated, the
/// lookup lives here.
pub trait WireEnum: Copy + Eq + fmt::Debug + fmt::Display + Sized + 'static {
    const NAME: &'static str;

    /// Wire strings in declaration order.
    const VALUES: &'static [&'static str];

    fn variants() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive reverse lookup of a wire string.
    fn from_value(value: &str) -> Result<Self> {
        if value.is_empty() {
            tracing::debug!(enum_name = Self::NAME, "rejected empty enum value");
            return Err(ModelError::EmptyEnumValue {
                enum_name: Self::NAME,
            });
        }

        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| {
                tracing::debug!(enum_name = Self::NAME, value, "rejected unknown enum value");
                ModelError::UnknownEnumValue {
                    enum_name: Self::NAME,
                    value: value.to_string(),
                }
            })
    }

    /// Same as [`WireEnum::from_value`], with a missing value treated as empty.
    fn from_optional_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => Self::from_value(value),
            None => Err(ModelError::EmptyEnumValue {
                enum_name: Self::NAME,
            }),
        }
    }
}

/// Binds a request shape to its EC2 action and result shape.
pub trait Ec2Request: Shape {
    /// EC2 query action name, e.g. `DescribeInstances`.
    const ACTION: &'static str;

    type Output: Shape;
}
