use repogen_core::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Node {
    Text(String),
    Var {
        name: String,
        filter: Option<Filter>,
        line: usize,
    },
    Section {
        name: String,
        inverted: bool,
        line: usize,
        body: Vec<Node>,
    },
}

/// Transformations applicable to a variable with `{{Name|filter}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Filter {
    Lcfirst,
    Ucfirst,
}

#[derive(Debug)]
enum Token<'a> {
    Text(&'a str),
    Var {
        name: String,
        filter: Option<Filter>,
        line: usize,
    },
    Open {
        name: String,
        inverted: bool,
        line: usize,
    },
    Close {
        name: String,
        line: usize,
    },
    Comment,
}

pub(super) fn parse(template: &str, src: &str) -> Result<Vec<Node>> {
    let tokens = tokenize(template, src)?;
    build(template, tokens)
}

fn tokenize<'a>(template: &str, src: &'a str) -> Result<Vec<Token<'a>>> {
    let mut tokens = vec![];
    let mut pos = 0;

    while let Some(offset) = src[pos..].find("{{") {
        let start = pos + offset;
        let line = line_of(src, start);

        let Some(len) = src[start + 2..].find("}}") else {
            return Err(Error::invalid_template(template, line, "unclosed tag"));
        };
        let end = start + 2 + len + 2;
        let token = parse_tag(template, line, src[start + 2..start + 2 + len].trim())?;

        // Section and comment tags alone on their line take the line with them
        let (text_end, next) = match token {
            Token::Var { .. } => (start, end),
            _ => standalone(src, pos, start, end).unwrap_or((start, end)),
        };

        if text_end > pos {
            tokens.push(Token::Text(&src[pos..text_end]));
        }
        if !matches!(token, Token::Comment) {
            tokens.push(token);
        }
        pos = next;
    }

    if pos < src.len() {
        tokens.push(Token::Text(&src[pos..]));
    }

    Ok(tokens)
}

fn parse_tag<'a>(template: &str, line: usize, body: &str) -> Result<Token<'a>> {
    let token = if body.starts_with('!') {
        Token::Comment
    } else if let Some(name) = body.strip_prefix('#') {
        Token::Open {
            name: parse_name(template, line, name)?,
            inverted: false,
            line,
        }
    } else if let Some(name) = body.strip_prefix('^') {
        Token::Open {
            name: parse_name(template, line, name)?,
            inverted: true,
            line,
        }
    } else if let Some(name) = body.strip_prefix('/') {
        Token::Close {
            name: parse_name(template, line, name)?,
            line,
        }
    } else {
        let (name, filter) = match body.split_once('|') {
            Some((name, filter)) => (name, Some(parse_filter(template, line, filter)?)),
            None => (body, None),
        };
        Token::Var {
            name: parse_name(template, line, name)?,
            filter,
            line,
        }
    };

    Ok(token)
}

fn parse_name(template: &str, line: usize, name: &str) -> Result<String> {
    let name = name.trim();
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
        return Err(Error::invalid_template(
            template,
            line,
            format!("invalid name `{name}`"),
        ));
    }

    Ok(name.to_string())
}

fn parse_filter(template: &str, line: usize, filter: &str) -> Result<Filter> {
    match filter.trim() {
        "lcfirst" => Ok(Filter::Lcfirst),
        "ucfirst" => Ok(Filter::Ucfirst),
        other => Err(Error::invalid_template(
            template,
            line,
            format!("unknown filter `{other}`"),
        )),
    }
}

/// If the tag spanning `start..end` is the only thing on its line, returns
/// where the preceding text ends and where scanning resumes.
fn standalone(src: &str, pos: usize, start: usize, end: usize) -> Option<(usize, usize)> {
    let line_start = src[..start].rfind('\n').map_or(0, |i| i + 1);
    if line_start < pos || !is_blank(&src[line_start..start]) {
        return None;
    }

    let line_end = src[end..].find('\n').map_or(src.len(), |i| end + i + 1);
    if !is_blank(&src[end..line_end]) {
        return None;
    }

    Some((line_start, line_end))
}

fn is_blank(s: &str) -> bool {
    s.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

fn line_of(src: &str, offset: usize) -> usize {
    src[..offset].matches('\n').count() + 1
}

fn build(template: &str, tokens: Vec<Token<'_>>) -> Result<Vec<Node>> {
    struct Frame {
        name: String,
        inverted: bool,
        line: usize,
        body: Vec<Node>,
    }

    let mut root = vec![];
    let mut stack: Vec<Frame> = vec![];

    for token in tokens {
        let node = match token {
            Token::Text(text) => Node::Text(text.to_string()),
            Token::Var { name, filter, line } => Node::Var { name, filter, line },
            Token::Open {
                name,
                inverted,
                line,
            } => {
                stack.push(Frame {
                    name,
                    inverted,
                    line,
                    body: vec![],
                });
                continue;
            }
            Token::Close { name, line } => {
                let Some(frame) = stack.pop() else {
                    return Err(Error::invalid_template(
                        template,
                        line,
                        format!("closing tag for `{name}` without an open section"),
                    ));
                };

                if frame.name != name {
                    return Err(Error::invalid_template(
                        template,
                        line,
                        format!(
                            "section `{}` opened on line {} is closed as `{name}`",
                            frame.name, frame.line
                        ),
                    ));
                }

                Node::Section {
                    name: frame.name,
                    inverted: frame.inverted,
                    line: frame.line,
                    body: frame.body,
                }
            }
            Token::Comment => continue,
        };

        match stack.last_mut() {
            Some(frame) => frame.body.push(node),
            None => root.push(node),
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(Error::invalid_template(
            template,
            frame.line,
            format!("unclosed section `{}`", frame.name),
        ));
    }

    Ok(root)
}
