//! Template tokenization and substitution.
//!
//! Templates are plain text with `{{ name }}` placeholders. Placeholder
//! names resolve against the parameter map, with dotted paths descending
//! into dict and list values. An unknown name renders as the empty string;
//! an unclosed placeholder is a syntax error.

use polyglot_rs_core::error::{PolyglotError, PolyglotResult};

use crate::context::{Params, Value};

/// A token produced by the template tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal text segment.
    Text(String),
    /// A placeholder: `{{ expression }}`.
    Variable(String),
}

/// Tokenizes a template into text and placeholder tokens.
///
/// # Errors
///
/// Returns a `TemplateSyntaxError` if a placeholder is opened but never
/// closed, or if a placeholder is empty.
pub fn tokenize(source: &str) -> PolyglotResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut remaining = source;

    while !remaining.is_empty() {
        match remaining.find("{{") {
            None => {
                tokens.push(Token::Text(remaining.to_string()));
                break;
            }
            Some(pos) => {
                if pos > 0 {
                    tokens.push(Token::Text(remaining[..pos].to_string()));
                }
                let after_open = &remaining[pos + 2..];
                let Some(end) = after_open.find("}}") else {
                    return Err(PolyglotError::TemplateSyntaxError(
                        "unclosed placeholder: expected '}}'".to_string(),
                    ));
                };
                let content = after_open[..end].trim();
                if content.is_empty() {
                    return Err(PolyglotError::TemplateSyntaxError(
                        "empty placeholder".to_string(),
                    ));
                }
                tokens.push(Token::Variable(content.to_string()));
                remaining = &after_open[end + 2..];
            }
        }
    }

    Ok(tokens)
}

/// Renders `template` against `params`.
///
/// # Errors
///
/// Returns a `TemplateSyntaxError` for malformed placeholder syntax. A
/// placeholder that resolves to nothing is not an error; it renders as the
/// empty string.
pub fn render(template: &str, params: &Params) -> PolyglotResult<String> {
    let tokens = tokenize(template)?;
    let mut out = String::with_capacity(template.len());

    for token in tokens {
        match token {
            Token::Text(text) => out.push_str(&text),
            Token::Variable(expression) => {
                if let Some(value) = resolve(&expression, params) {
                    out.push_str(&value.to_display_string());
                }
            }
        }
    }

    Ok(out)
}

/// Resolves a dotted expression (`user.name`, `items.0`) against the map.
fn resolve<'a>(expression: &str, params: &'a Params) -> Option<&'a Value> {
    let mut segments = expression.split('.');
    let mut current = params.get(segments.next()?)?;
    for segment in segments {
        current = current.resolve_path(segment)?;
    }
    Some(current)
}
