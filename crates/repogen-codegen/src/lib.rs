mod artifact;
pub use artifact::{Artifact, ArtifactKind, Artifacts};

mod expand;

mod go;

pub mod template;
pub use template::{Scope, Template, Templates, Value};

use repogen_core::{GenerationOptions, Result, TableMetadata};

/// Renders the record, repository interface and repository implementation
/// for one table.
///
/// All three artifacts are rendered from the same scope, so identifiers,
/// the key type and package names agree across them.
pub fn render(
    metadata: &TableMetadata,
    options: &GenerationOptions,
    templates: &Templates,
) -> Result<Artifacts> {
    let scope = expand::root_scope(metadata, options)?;

    let render_kind = |kind: ArtifactKind| -> Result<Artifact> {
        let contents = templates.get(kind).render(&scope).map_err(|err| {
            err.context(format!(
                "rendering {} for table `{}`",
                kind.template_name(),
                metadata.table_name()
            ))
        })?;

        let path = kind.path(metadata.table_name(), &options.packages);
        tracing::debug!(
            table = %metadata.table_name(),
            path = %path.display(),
            "rendered artifact"
        );

        Ok(Artifact {
            kind,
            path,
            contents,
        })
    };

    Ok(Artifacts {
        record: render_kind(ArtifactKind::Record)?,
        repository: render_kind(ArtifactKind::Repository)?,
        repository_impl: render_kind(ArtifactKind::RepositoryImpl)?,
    })
}
