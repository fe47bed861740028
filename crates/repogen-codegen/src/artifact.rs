use repogen_core::schema::Packages;

use std::path::PathBuf;

/// The three files generated per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The record struct mapping one row
    Record,

    /// The repository interface and its search options
    Repository,

    /// The ORM-backed implementation of the repository interface
    RepositoryImpl,
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,

    /// Path relative to the output directory
    pub path: PathBuf,

    pub contents: String,
}

/// All artifacts rendered for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub record: Artifact,
    pub repository: Artifact,
    pub repository_impl: Artifact,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Record,
        ArtifactKind::Repository,
        ArtifactKind::RepositoryImpl,
    ];

    /// File stem of the template rendering this kind.
    pub fn template_name(self) -> &'static str {
        match self {
            ArtifactKind::Record => "record",
            ArtifactKind::Repository => "repository",
            ArtifactKind::RepositoryImpl => "repository_impl",
        }
    }

    /// Where the artifact for `table` lives, relative to the output directory.
    ///
    /// The record goes into the model package, the interface into the
    /// repository package and the implementation into a package nested under
    /// the repository package.
    pub fn path(self, table: &str, packages: &Packages) -> PathBuf {
        let mut path = PathBuf::new();

        match self {
            ArtifactKind::Record => {
                path.push(&packages.model);
                path.push(format!("{table}_model.go"));
            }
            ArtifactKind::Repository => {
                path.push(&packages.repository);
                path.push(format!("{table}_repository.go"));
            }
            ArtifactKind::RepositoryImpl => {
                path.push(&packages.repository);
                path.push(&packages.implementation);
                path.push(format!("{table}_repository.go"));
            }
        }

        path
    }
}

impl Artifacts {
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.record, &self.repository, &self.repository_impl].into_iter()
    }
}

impl IntoIterator for Artifacts {
    type Item = Artifact;
    type IntoIter = std::array::IntoIter<Artifact, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [self.record, self.repository, self.repository_impl].into_iter()
    }
}
