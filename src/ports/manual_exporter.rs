//! User manual export port.

use std::path::PathBuf;

use crate::domain::AppError;

/// A request to render a documentation space into a manual file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Configuration file of the export tool.
    pub config_path: PathBuf,
    /// Documentation space to export.
    pub space_key: String,
    /// Output file.
    pub target: PathBuf,
}

impl ExportRequest {
    /// Arguments handed to the export tool, in order.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--config".to_string(),
            self.config_path.display().to_string(),
            "space-export".to_string(),
            self.space_key.clone(),
            self.target.display().to_string(),
        ]
    }
}

/// Port for the external document-export tool.
pub trait ManualExporter {
    /// Program name, used when previewing the command line.
    fn program(&self) -> &str;

    /// Render the space into the target file.
    fn export(&self, request: &ExportRequest) -> Result<(), AppError>;

    /// Full command line for a request, for logs and dry-run previews.
    fn command_line(&self, request: &ExportRequest) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(request.args());
        parts.join(" ")
    }
}
