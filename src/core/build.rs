use clap::ValueEnum;

use crate::error::{InstallerError, Result};

/// Release channel of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Build {
    #[default]
    Stable,
    Insiders,
}

impl Build {
    pub fn parse(value: &str) -> Result<Self> {
        <Build as ValueEnum>::from_str(value, false).map_err(|_| InstallerError::InvalidBuild {
            build: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Build::Stable => "stable",
            Build::Insiders => "insiders",
        }
    }

    /// Channel name understood by the download service.
    pub fn query_value(&self) -> &'static str {
        match self {
            Build::Stable => "stable",
            Build::Insiders => "insider",
        }
    }

    /// Launcher shipped in the archive's `bin` directory.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Build::Stable => "code",
            Build::Insiders => "code-insiders",
        }
    }
}

impl std::fmt::Display for Build {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
