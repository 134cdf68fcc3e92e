use crate::core::codec::InputFormat;
use crate::core::table::OutputFormat;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List enums, or the wire values of one enum
    Enums {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the canonical wire value of an enum constant
    ParseEnum { name: String, value: String },

    /// List registered shape names
    Shapes,

    /// List operations with their request and result shapes
    Operations {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode a shape from a JSON or TOML file and print it
    Render {
        shape: String,

        file: PathBuf,

        /// Defaults to the file extension
        #[arg(long, value_enum)]
        input_format: Option<InputFormat>,

        /// Print canonical JSON instead of the text form
        #[arg(long)]
        json: bool,
    },
}
