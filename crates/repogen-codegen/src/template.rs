//! A small logic-less template language.
//!
//! * `{{Name}}` inserts a text value; `{{Name|lcfirst}}` and
//!   `{{Name|ucfirst}}` change the case of its first character.
//! * `{{#Name}}...{{/Name}}` renders its body once per item of a list, once
//!   with an object pushed as the innermost scope, or once if a text or
//!   boolean value is truthy.
//! * `{{^Name}}...{{/Name}}` renders its body if the value is falsy.
//! * `{{! comment }}` renders nothing.
//!
//! Section and comment tags that are alone on their line remove the line
//! from the output. Unknown variables are errors, never empty strings.

mod parse;
use parse::Node;

mod render;
use render::Renderer;

mod scope;
pub use scope::{Scope, Value};

use crate::ArtifactKind;
use repogen_core::{Error, Result};

use std::{fs, path::Path};

const RECORD: &str = include_str!("../templates/go-gorm/record.tpl");
const REPOSITORY: &str = include_str!("../templates/go-gorm/repository.tpl");
const REPOSITORY_IMPL: &str = include_str!("../templates/go-gorm/repository_impl.tpl");

#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

/// One template per artifact kind.
#[derive(Debug, Clone)]
pub struct Templates {
    pub record: Template,
    pub repository: Template,
    pub repository_impl: Template,
}

impl Template {
    /// Parses `src`. `name` identifies the template in error messages.
    pub fn parse(name: impl Into<String>, src: &str) -> Result<Template> {
        let name = name.into();
        let nodes = parse::parse(&name, src)?;
        Ok(Template { name, nodes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, scope: &Scope) -> Result<String> {
        let mut dst = String::new();
        Renderer::new(&self.name, scope, &mut dst).render(&self.nodes)?;
        Ok(dst)
    }
}

impl Templates {
    /// The built-in templates producing Go code for the gorm ORM.
    pub fn go_gorm() -> Result<Templates> {
        Ok(Templates {
            record: Template::parse("record", RECORD)?,
            repository: Template::parse("repository", REPOSITORY)?,
            repository_impl: Template::parse("repository_impl", REPOSITORY_IMPL)?,
        })
    }

    /// Loads `record.tpl`, `repository.tpl` and `repository_impl.tpl` from
    /// `dir`. Files that do not exist fall back to the built-in template.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Templates> {
        let dir = dir.as_ref();
        let mut templates = Templates::go_gorm()?;

        for kind in ArtifactKind::ALL {
            let path = dir.join(format!("{}.tpl", kind.template_name()));
            if !path.exists() {
                continue;
            }

            tracing::debug!(path = %path.display(), "loading template override");
            let src = fs::read_to_string(&path).map_err(|err| {
                Error::from(err).context(format!("reading template `{}`", path.display()))
            })?;
            *templates.get_mut(kind) = Template::parse(kind.template_name(), &src)?;
        }

        Ok(templates)
    }

    pub fn get(&self, kind: ArtifactKind) -> &Template {
        match kind {
            ArtifactKind::Record => &self.record,
            ArtifactKind::Repository => &self.repository,
            ArtifactKind::RepositoryImpl => &self.repository_impl,
        }
    }

    fn get_mut(&mut self, kind: ArtifactKind) -> &mut Template {
        match kind {
            ArtifactKind::Record => &mut self.record,
            ArtifactKind::Repository => &mut self.repository,
            ArtifactKind::RepositoryImpl => &mut self.repository_impl,
        }
    }
}
