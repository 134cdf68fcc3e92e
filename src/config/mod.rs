pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

pub use cli::Command;

#[derive(Debug, Clone, Parser)]
#[command(name = "ec2-model")]
#[command(about = "Inspect EC2 model enums, shapes and operations")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Render { shape, file, .. } => {
                validate_non_empty_string("shape", shape)?;
                validate_path("file", &file.to_string_lossy())
            }
            Command::ParseEnum { name, .. } => validate_non_empty_string("name", name),
            Command::Enums { .. } | Command::Shapes | Command::Operations { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::OutputFormat;

    #[test]
    fn test_parse_render_arguments() {
        let config = CliConfig::try_parse_from([
            "ec2-model",
            "--verbose",
            "render",
            "Tag",
            "tag.toml",
            "--json",
        ])
        .unwrap();

        assert!(config.verbose);
        match &config.command {
            Command::Render {
                shape, file, json, ..
            } => {
                assert_eq!(shape, "Tag");
                assert_eq!(file.to_str(), Some("tag.toml"));
                assert!(*json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_enums_format() {
        let config =
            CliConfig::try_parse_from(["ec2-model", "enums", "--format", "csv"]).unwrap();
        match config.command {
            Command::Enums { name, format } => {
                assert_eq!(name, None);
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_blank_shape() {
        let config = CliConfig::try_parse_from(["ec2-model", "render", " ", "tag.json"]).unwrap();
        assert!(config.validate().is_err());
    }
}
