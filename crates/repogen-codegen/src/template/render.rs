use super::parse::{Filter, Node};
use super::{Scope, Value};

use repogen_core::{Error, Result};
use std_util::str::{lcfirst, ucfirst};

pub(super) struct Renderer<'s, 'd> {
    template: &'s str,

    /// Innermost scope last
    scopes: Vec<&'s Scope>,

    dst: &'d mut String,
}

impl<'s, 'd> Renderer<'s, 'd> {
    pub(super) fn new(template: &'s str, root: &'s Scope, dst: &'d mut String) -> Self {
        Renderer {
            template,
            scopes: vec![root],
            dst,
        }
    }

    pub(super) fn render(&mut self, nodes: &[Node]) -> Result<()> {
        for node in nodes {
            match node {
                Node::Text(text) => self.dst.push_str(text),
                Node::Var { name, filter, line } => {
                    let Value::Text(text) = self.lookup(name, *line)? else {
                        return Err(Error::invalid_template(
                            self.template,
                            *line,
                            format!("`{name}` is not a text value"),
                        ));
                    };

                    match filter {
                        Some(Filter::Lcfirst) => self.dst.push_str(&lcfirst(text)),
                        Some(Filter::Ucfirst) => self.dst.push_str(&ucfirst(text)),
                        None => self.dst.push_str(text),
                    }
                }
                Node::Section {
                    name,
                    inverted,
                    line,
                    body,
                } => {
                    let value = self.lookup(name, *line)?;

                    if *inverted {
                        if !value.is_truthy() {
                            self.render(body)?;
                        }
                        continue;
                    }

                    match value {
                        Value::List(items) => {
                            for item in items {
                                self.nested(item, body)?;
                            }
                        }
                        Value::Object(scope) => self.nested(scope, body)?,
                        value if value.is_truthy() => self.render(body)?,
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    fn nested(&mut self, scope: &'s Scope, body: &[Node]) -> Result<()> {
        self.scopes.push(scope);
        let ret = self.render(body);
        self.scopes.pop();
        ret
    }

    fn lookup(&self, name: &str, line: usize) -> Result<&'s Value> {
        self.scopes
            .iter()
            .rev()
            .copied()
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| {
                Error::invalid_template(self.template, line, format!("unknown variable `{name}`"))
            })
    }
}
