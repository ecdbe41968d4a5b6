//! Destinations for generated units.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// A named block of generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    name: String,
    content: String,
}

impl GeneratedUnit {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Receives the units of a generation pass.
///
/// Sinks do not validate content; problems surface when the host compiles
/// the emitted text.
pub trait EmissionSink {
    fn emit(&mut self, unit: &GeneratedUnit) -> Result<()>;
}

/// Keeps units in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<GeneratedUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[GeneratedUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<GeneratedUnit> {
        self.units
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, unit: &GeneratedUnit) -> Result<()> {
        self.units.push(unit.clone());
        Ok(())
    }
}

/// Writes each unit to `<dir>/<name>`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl EmissionSink for DirectorySink {
    fn emit(&mut self, unit: &GeneratedUnit) -> Result<()> {
        let path = self.dir.join(unit.name());
        debug!(path = %path.display(), bytes = unit.content().len(), "Writing generated unit");
        write_atomic(&path, unit.content())
    }
}

/// Writes `content` to `path` through a temp file in the same directory.
///
/// Readers see either the previous file or the complete new one.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| GenerateError::Io { path, source }
    };

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(io_error(parent))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(io_error(parent))?;
    temp.write_all(content.as_bytes()).map_err(io_error(temp.path()))?;
    temp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_sink_keeps_emission_order() {
        let mut sink = MemorySink::new();
        sink.emit(&GeneratedUnit::new("b.rs", "b")).unwrap();
        sink.emit(&GeneratedUnit::new("a.rs", "a")).unwrap();

        let names: Vec<&str> = sink.units().iter().map(GeneratedUnit::name).collect();
        assert_eq!(names, ["b.rs", "a.rs"]);
    }

    #[test]
    fn directory_sink_writes_named_files() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("out"));

        sink.emit(&GeneratedUnit::new("net.Kind.rs", "// kind")).unwrap();

        let written = fs::read_to_string(dir.path().join("out/net.Kind.rs")).unwrap();
        assert_eq!(written, "// kind");
    }

    #[test]
    fn directory_sink_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());

        sink.emit(&GeneratedUnit::new("unit.rs", "old")).unwrap();
        sink.emit(&GeneratedUnit::new("unit.rs", "new")).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("unit.rs")).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temp files should not be left behind");
    }
}
