use std::process::Command;

use crate::domain::AppError;
use crate::ports::{ExportRequest, ManualExporter};

const DEFAULT_PROGRAM: &str = "confluence-tools";

/// Exports a Confluence space to PDF by running the `confluence-tools` CLI.
#[derive(Debug, Clone)]
pub struct ConfluenceToolsExporter {
    program: String,
}

impl Default for ConfluenceToolsExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfluenceToolsExporter {
    pub fn new() -> Self {
        Self { program: DEFAULT_PROGRAM.to_string() }
    }

    /// Use a different executable, e.g. a wrapper script.
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl ManualExporter for ConfluenceToolsExporter {
    fn program(&self) -> &str {
        &self.program
    }

    fn export(&self, request: &ExportRequest) -> Result<(), AppError> {
        let output = Command::new(&self.program).args(request.args()).output().map_err(|e| {
            AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!("Failed to execute {}: {}", self.program, e),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ExternalToolError {
                tool: self.program.clone(),
                error: format!("space export exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(())
    }
}
