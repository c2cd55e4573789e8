use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;

use crate::{
    config::{Config, OutputFormat},
    document,
    kube::apis::monitoring::v1alpha1::AlertmanagerConfigList,
    lint::Linter,
    logger,
};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub enum SubCommand {
    /// Validate AlertmanagerConfig manifests
    Validate {
        /// Manifest files (YAML or JSON, multi-document YAML allowed)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print manifests in canonical form
    Fmt {
        /// Output format [default: output.format from the config file]
        #[arg(short, long, value_name = "yaml|json", value_enum)]
        output: Option<OutputFormat>,

        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl SubCommand {
    pub fn run<W: Write>(self, config: &Config, out: &mut W) -> Result<Outcome> {
        match self {
            SubCommand::Validate { files } => {
                let linter = Linter::new(config.lint.clone());

                validate_files(&files, &linter, out)
            }
            SubCommand::Fmt { output, file } => {
                let format = output.unwrap_or(config.output.format);

                format_file(&file, format, out)?;

                Ok(Outcome::Success)
            }
        }
    }
}

fn validate_files<W: Write>(files: &[PathBuf], linter: &Linter, out: &mut W) -> Result<Outcome> {
    let mut outcome = Outcome::Success;

    for file in files {
        let resources = match document::load_file(file) {
            Ok(resources) => resources,
            Err(err) => {
                let err = anyhow::Error::new(err);

                logger!(error, "{:#}", err);

                writeln!(out, "NG {:#}", err)?;

                outcome = Outcome::Failure;

                continue;
            }
        };

        let report = linter.lint(&resources);

        for entry in report.entries() {
            writeln!(out, "{}", entry)?;
        }

        if !report.is_ok() {
            outcome = Outcome::Failure;
        }
    }

    Ok(outcome)
}

fn format_file<W: Write>(file: &Path, format: OutputFormat, out: &mut W) -> Result<()> {
    let resources = document::load_file(file)?;

    match format {
        OutputFormat::Yaml => {
            for (i, resource) in resources.iter().enumerate() {
                if 0 < i {
                    writeln!(out, "---")?;
                }

                write!(out, "{}", serde_yaml::to_string(resource)?)?;
            }
        }
        OutputFormat::Json => {
            let json = if let [resource] = resources.as_slice() {
                serde_json::to_string_pretty(resource)?
            } else {
                serde_json::to_string_pretty(&AlertmanagerConfigList {
                    items: resources,
                    ..Default::default()
                })?
            };

            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}
