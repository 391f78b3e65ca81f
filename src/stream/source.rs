use super::LoadError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Anything that can hand over the full text of a vector file
pub trait VectorSource {
    /// Name used to tag every record read from this source
    fn name(&self) -> String;

    /// Read the complete text content in one go
    fn read_text(&self) -> Result<String, LoadError>;
}

/// Vector file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VectorSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: self.path.clone(),
            },
            _ => LoadError::Unreadable {
                path: self.path.clone(),
                source,
            },
        })
    }
}

/// In-memory vector text, used where no filesystem is wanted
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Build a source from individual lines, newline-terminated like generator output
    pub fn from_lines<S: AsRef<str>>(name: impl Into<String>, lines: &[S]) -> Self {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self::new(name, text)
    }
}

impl VectorSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_text(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}
