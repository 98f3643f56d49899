use crate::error::GenError;

/// Receives generated documents. Implementations decide how they are delivered.
pub trait Sink {
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), GenError>;
}

/// Keeps every written document in memory, in write order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), GenError> {
        self.files.push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, file_name: &str, content: &str) -> Result<(), GenError> {
        (**self).write(file_name, content)
    }
}
