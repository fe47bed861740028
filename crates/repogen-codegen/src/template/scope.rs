use indexmap::IndexMap;

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Rendered verbatim by `{{Name}}`
    Text(String),

    /// Only usable as a section condition
    Bool(bool),

    /// A section over a list renders once per item, with the item as scope
    List(Vec<Scope>),

    /// A section over an object renders once, with the object as scope
    Object(Scope),
}

/// Variables visible to a template.
///
/// Lookups that miss in a nested scope fall back to the enclosing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    vars: IndexMap<String, Value>,
}

impl Value {
    pub(super) fn is_truthy(&self) -> bool {
        match self {
            Value::Text(text) => !text.is_empty(),
            Value::Bool(b) => *b,
            Value::List(items) => !items.is_empty(),
            Value::Object(_) => true,
        }
    }
}

impl Scope {
    pub fn new() -> Scope {
        Scope::default()
    }

    /// Binds `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<Scope>> for Value {
    fn from(value: Vec<Scope>) -> Self {
        Value::List(value)
    }
}

impl From<Scope> for Value {
    fn from(value: Scope) -> Self {
        Value::Object(value)
    }
}

/// An absent object is falsy, so `{{^Name}}` sections render for it.
impl From<Option<Scope>> for Value {
    fn from(value: Option<Scope>) -> Self {
        match value {
            Some(scope) => Value::Object(scope),
            None => Value::Bool(false),
        }
    }
}
