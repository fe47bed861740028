use super::{Initialisms, Normalizer};
use serde::{Deserialize, Serialize};

/// Options for one generation run.
///
/// Loaded from the `[generate]` table of `repogen.toml` or built in code:
///
/// ```
/// use repogen_core::GenerationOptions;
///
/// let options = GenerationOptions::new()
///     .include_orm_tags(true)
///     .explicit_updated_at_column("modified_on");
/// assert_eq!(options.updated_at_override(), Some("modified_on"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    /// Emit `json:"<column>"` tags on record fields
    pub include_json_tags: bool,

    /// Emit `gorm:"column:<column>"` tags on record fields. Also makes both
    /// timestamp columns mandatory.
    pub include_orm_tags: bool,

    /// Use `gopkg.in/guregu/null` wrappers for nullable columns instead of
    /// `database/sql` null types
    pub use_nullable_wrapper_types: bool,

    /// Column to use as the created-at timestamp instead of name sniffing
    pub explicit_created_at_column: Option<String>,

    /// Column to use as the updated-at timestamp instead of name sniffing
    pub explicit_updated_at_column: Option<String>,

    /// Initialisms recognized in addition to the common set
    pub extra_initialisms: Vec<String>,

    /// Go packages the artifacts are generated into
    pub packages: Packages,

    /// Import path of the nullable wrapper package
    pub null_import: String,

    /// Import path of the ORM package used by the repository implementation
    pub orm_import: String,
}

/// Go package names of the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Packages {
    /// Package of the record type
    pub model: String,

    /// Package of the repository interface
    pub repository: String,

    /// Package of the repository implementation, nested under the
    /// repository package
    pub implementation: String,

    /// Go module path prefixed to import paths, e.g. `github.com/acme/shop`.
    ///
    /// Without it the repository packages import the bare package names,
    /// which only resolve in a GOPATH layout; set it for code that builds
    /// inside a Go module.
    pub module: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_json_tags: false,
            include_orm_tags: false,
            use_nullable_wrapper_types: false,
            explicit_created_at_column: None,
            explicit_updated_at_column: None,
            extra_initialisms: vec![],
            packages: Packages::default(),
            null_import: "gopkg.in/guregu/null.v3".to_string(),
            orm_import: "github.com/jinzhu/gorm".to_string(),
        }
    }
}

impl GenerationOptions {
    /// Create a new GenerationOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_json_tags(mut self, enabled: bool) -> Self {
        self.include_json_tags = enabled;
        self
    }

    pub fn include_orm_tags(mut self, enabled: bool) -> Self {
        self.include_orm_tags = enabled;
        self
    }

    pub fn use_nullable_wrapper_types(mut self, enabled: bool) -> Self {
        self.use_nullable_wrapper_types = enabled;
        self
    }

    pub fn explicit_created_at_column(mut self, column: impl Into<String>) -> Self {
        self.explicit_created_at_column = Some(column.into());
        self
    }

    pub fn explicit_updated_at_column(mut self, column: impl Into<String>) -> Self {
        self.explicit_updated_at_column = Some(column.into());
        self
    }

    pub fn extra_initialism(mut self, initialism: impl Into<String>) -> Self {
        self.extra_initialisms.push(initialism.into());
        self
    }

    pub fn packages(mut self, packages: Packages) -> Self {
        self.packages = packages;
        self
    }

    /// The explicit created-at column, treating an empty name as absent.
    pub fn created_at_override(&self) -> Option<&str> {
        non_empty(self.explicit_created_at_column.as_deref())
    }

    /// The explicit updated-at column, treating an empty name as absent.
    pub fn updated_at_override(&self) -> Option<&str> {
        non_empty(self.explicit_updated_at_column.as_deref())
    }

    /// A normalizer recognizing the common initialisms plus
    /// `extra_initialisms`.
    pub fn normalizer(&self) -> Normalizer {
        let mut initialisms = Initialisms::common();
        initialisms.extend(&self.extra_initialisms);
        Normalizer::new(initialisms)
    }
}

impl Default for Packages {
    fn default() -> Self {
        Self {
            model: "model".to_string(),
            repository: "repository".to_string(),
            implementation: "mysql".to_string(),
            module: None,
        }
    }
}

impl Packages {
    pub fn model(mut self, name: impl Into<String>) -> Self {
        self.model = name.into();
        self
    }

    pub fn repository(mut self, name: impl Into<String>) -> Self {
        self.repository = name.into();
        self
    }

    pub fn implementation(mut self, name: impl Into<String>) -> Self {
        self.implementation = name.into();
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// True if a non-blank module path is set.
    pub fn has_module(&self) -> bool {
        non_empty(self.module.as_deref()).is_some()
    }

    /// Import path of the model package.
    pub fn model_import(&self) -> String {
        self.import_path(&self.model)
    }

    /// Import path of the repository package.
    pub fn repository_import(&self) -> String {
        self.import_path(&self.repository)
    }

    fn import_path(&self, package: &str) -> String {
        match non_empty(self.module.as_deref()) {
            Some(module) => format!("{}/{}", module.trim_end_matches('/'), package),
            None => package.to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
