use std::fs;
use std::path::PathBuf;

use prost_types::compiler::code_generator_response;
use rn_grpc::{GenError, Sink};
use tracing::debug;

/// Collects documents as protoc response files.
#[derive(Debug, Default)]
pub struct ResponseSink {
    files: Vec<code_generator_response::File>,
}

impl ResponseSink {
    pub fn into_files(self) -> Vec<code_generator_response::File> {
        self.files
    }
}

impl Sink for ResponseSink {
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), GenError> {
        // protoc rejects a response that names the same file twice.
        if self.files.iter().any(|f| f.name() == file_name) {
            return Err(GenError::Sink {
                file_name: file_name.to_string(),
                msg:       "already generated by an earlier file in this request".to_string(),
            });
        }
        self.files.push(code_generator_response::File {
            name: Some(file_name.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        });
        Ok(())
    }
}

/// Writes documents below a root directory, replacing existing files.
#[derive(Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSink { root: root.into() }
    }
}

impl Sink for DirSink {
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), GenError> {
        let path = self.root.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        debug!(path = %path.display(), "wrote file");
        Ok(())
    }
}
