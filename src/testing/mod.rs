mod fake_provider;
mod recording_exporter;

pub use fake_provider::FakeProvider;
pub use recording_exporter::RecordingExporter;
