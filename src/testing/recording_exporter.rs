use std::fs;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ExportRequest, ManualExporter};

/// Exporter that records requests and writes a placeholder manual.
#[derive(Default)]
pub struct RecordingExporter {
    pub requests: Mutex<Vec<ExportRequest>>,
}

impl RecordingExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ExportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ManualExporter for RecordingExporter {
    fn program(&self) -> &str {
        "confluence-tools"
    }

    fn export(&self, request: &ExportRequest) -> Result<(), AppError> {
        fs::write(&request.target, b"%PDF-1.4\n")?;
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}
