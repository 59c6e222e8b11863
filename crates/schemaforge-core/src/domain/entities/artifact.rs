use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::ResourceName};

/// The three files generated for every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Route,
    Model,
    Controller,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [Self::Route, Self::Model, Self::Controller];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Model => "model",
            Self::Controller => "controller",
        }
    }

    /// File-name infix: `<resource>.<infix>.js`.
    pub const fn infix(&self) -> &'static str {
        match self {
            Self::Route => "routes",
            Self::Model => "model",
            Self::Controller => "controller",
        }
    }

    /// File name for a resource, e.g. `product.routes.js`.
    pub fn file_name(&self, resource: &ResourceName, extension: &str) -> String {
        format!("{}.{}.{}", resource, self.infix(), extension)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target directories for generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub routes_dir: PathBuf,
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
}

impl OutputLayout {
    /// Conventional `routes/`, `models/`, `controllers/` under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            routes_dir: root.join("routes"),
            models_dir: root.join("models"),
            controllers_dir: root.join("controllers"),
        }
    }

    pub fn dir_for(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Route => &self.routes_dir,
            ArtifactKind::Model => &self.models_dir,
            ArtifactKind::Controller => &self.controllers_dir,
        }
    }
}

/// A rendered file body and where it should be written.
///
/// Created by the renderer and consumed exactly once by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub target_path: PathBuf,
    pub body: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, target_path: impl Into<PathBuf>, body: String) -> Self {
        Self {
            kind,
            target_path: target_path.into(),
            body,
        }
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }
}

/// The full output of one generation run, in write order.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<GeneratedArtifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn with(mut self, artifact: GeneratedArtifact) -> Self {
        self.add(artifact);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::EmptyArtifactSet);
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            if !seen.insert(&artifact.target_path) {
                return Err(DomainError::DuplicatePath {
                    path: artifact.target_path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.target_path.as_path())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl IntoIterator for ArtifactSet {
    type Item = GeneratedArtifact;
    type IntoIter = std::vec::IntoIter<GeneratedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}
