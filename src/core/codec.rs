use crate::domain::ports::Shape;
use crate::utils::error::{ModelError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Text formats a shape can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Picks the format from a file extension, `None` when it is not recognised.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// A decoded shape whose concrete type is only known at runtime.
pub trait DynShape: fmt::Debug + fmt::Display {
    fn shape_name(&self) -> &'static str;

    /// Canonical JSON with wire names and unset fields omitted.
    fn to_json_pretty(&self) -> Result<String>;
}

impl<T: Shape + Serialize> DynShape for T {
    fn shape_name(&self) -> &'static str {
        T::SHAPE_NAME
    }

    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ModelError::from)
    }
}

pub fn decode_as<T: Shape + DeserializeOwned>(format: InputFormat, text: &str) -> Result<T> {
    let shape: T = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Toml => {
            let mut table: toml::Table = toml::from_str(text)?;
            table.iter_mut().for_each(|(_, value)| quote_datetimes(value));
            toml::Value::Table(table).try_into()?
        }
    };
    tracing::debug!(shape = T::SHAPE_NAME, ?format, "decoded shape");
    Ok(shape)
}

/// Rewrites native TOML datetimes as RFC 3339 strings so timestamp fields
/// accept both `AttachTime = 2024-03-01T12:30:00Z` and the quoted form.
fn quote_datetimes(value: &mut toml::Value) {
    match value {
        toml::Value::Datetime(datetime) => *value = toml::Value::String(datetime.to_string()),
        toml::Value::Array(items) => items.iter_mut().for_each(quote_datetimes),
        toml::Value::Table(table) => table
            .iter_mut()
            .for_each(|(_, value)| quote_datetimes(value)),
        _ => {}
    }
}

/// Boxed form of [`decode_as`], used by the shape catalog.
pub fn decode_boxed<T>(format: InputFormat, text: &str) -> Result<Box<dyn DynShape>>
where
    T: Shape + Serialize + DeserializeOwned + 'static,
{
    let shape: T = decode_as(format, text)?;
    Ok(Box::new(shape))
}
