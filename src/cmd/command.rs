use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ConfigLoadOption;

use super::SubCommand;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
pub struct Command {
    /// Logging
    #[arg(short = 'l', long, global = true, display_order = 1000)]
    pub logging: bool,

    /// Config file path
    #[arg(long, global = true, display_order = 1000)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: SubCommand,
}

impl Command {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn config_load_option(&self) -> Result<ConfigLoadOption> {
        let option = if let Some(path) = &self.config_file {
            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path.clone()),
                Ok(false) => {
                    eprintln!("Config file not found: {:?}", path);

                    ConfigLoadOption::Default
                }
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        } else {
            let Some(path) = xdg_config_home().map(|dir| dir.join("config.yaml")) else {
                return Ok(ConfigLoadOption::Default);
            };

            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path),
                Ok(false) => ConfigLoadOption::Default,
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        };

        Ok(option)
    }
}

fn xdg_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => Some(PathBuf::from(dir).join("amconfig")),
        None => dirs::home_dir().map(|home| home.join(".config").join("amconfig")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    use crate::config::OutputFormat;

    #[test]
    fn validate_requires_files() {
        let cmd = Command::try_parse_from(["amconfig", "validate"]);

        assert_eq!(
            cmd.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn validate_accepts_multiple_files() {
        let cmd = Command::try_parse_from(["amconfig", "validate", "a.yaml", "b.yaml"]).unwrap();

        assert_eq!(
            cmd.subcommand,
            SubCommand::Validate {
                files: vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]
            }
        );
        assert!(!cmd.logging);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cmd = Command::try_parse_from([
            "amconfig",
            "fmt",
            "-o",
            "json",
            "a.yaml",
            "--logging",
            "--config-file",
            "config.yaml",
        ])
        .unwrap();

        assert!(cmd.logging);
        assert_eq!(cmd.config_file, Some(PathBuf::from("config.yaml")));
        assert_eq!(
            cmd.subcommand,
            SubCommand::Fmt {
                output: Some(OutputFormat::Json),
                file: PathBuf::from("a.yaml"),
            }
        );
    }

    #[test]
    fn unknown_output_format() {
        let cmd = Command::try_parse_from(["amconfig", "fmt", "-o", "toml", "a.yaml"]);

        assert_eq!(cmd.unwrap_err().kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn missing_config_file_falls_back_to_default() {
        let cmd = Command::try_parse_from([
            "amconfig",
            "--config-file",
            "/nonexistent/amconfig/config.yaml",
            "validate",
            "a.yaml",
        ])
        .unwrap();

        assert_eq!(cmd.config_load_option().unwrap(), ConfigLoadOption::Default);
    }
}
