//! Template compilation for Templatizer.
//! Defines the compiler seam the task depends on, plus the built-in
//! compiler that turns raw template text into a JavaScript function source.

use crate::error::{Error, Result};

/// Trait for template-to-function compilers.
pub trait TemplateCompiler {
    /// Compiles raw template text into the source of a JavaScript function
    /// that renders it.
    ///
    /// # Arguments
    /// * `template` - Raw template text
    ///
    /// # Returns
    /// * `Result<String>` - JavaScript function source
    fn compile(&self, template: &str) -> Result<String>;
}

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Literal text to emit verbatim
    Lit(&'a str),
    /// Placeholder path (contents between `{{` and `}}`, trimmed)
    Var(&'a str),
}

/// Splits template text into literal and placeholder segments.
fn parse_segments(input: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        match rest.find("{{") {
            None => {
                segments.push(Segment::Lit(rest));
                break;
            }
            Some(open) => {
                if open > 0 {
                    segments.push(Segment::Lit(&rest[..open]));
                }
                let after_open = &rest[open + 2..];
                match after_open.find("}}") {
                    None => {
                        return Err(Error::CompileError(
                            "unterminated placeholder, expected closing '}}'"
                                .to_string(),
                        ));
                    }
                    Some(close) => {
                        segments.push(Segment::Var(after_open[..close].trim()));
                        rest = &after_open[close + 2..];
                    }
                }
            }
        }
    }

    Ok(segments)
}

/// Returns true for a dotted JavaScript identifier path (`a`, `a.b.c`).
fn is_identifier_path(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

/// Encodes text as a JavaScript string literal via JSON string encoding.
fn js_string_literal(text: &str) -> Result<String> {
    serde_json::to_string(text).map_err(|e| Error::CompileError(e.to_string()))
}

/// Built-in compiler producing a self-contained rendering function per
/// template.
///
/// Literal text becomes a JavaScript string literal; `{{ path }}`
/// placeholders become `data.<path>` lookups concatenated into the return
/// expression. A template without placeholders compiles to a parameterless
/// function.
pub struct FuncCompiler;

impl FuncCompiler {
    /// Creates a new FuncCompiler instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FuncCompiler {
    fn default() -> Self {
        FuncCompiler::new()
    }
}

impl TemplateCompiler for FuncCompiler {
    /// Compiles template text into a JavaScript function source.
    ///
    /// # Errors
    /// * `Error::CompileError` if a placeholder is unterminated or is not a
    ///   dotted identifier path
    fn compile(&self, template: &str) -> Result<String> {
        let segments = parse_segments(template)?;

        let mut parts = Vec::new();
        let mut has_placeholder = false;
        for segment in &segments {
            match segment {
                Segment::Lit(text) => parts.push(js_string_literal(text)?),
                Segment::Var(path) => {
                    if !is_identifier_path(path) {
                        return Err(Error::CompileError(format!(
                            "invalid placeholder '{}'",
                            path
                        )));
                    }
                    has_placeholder = true;
                    parts.push(format!("data.{}", path));
                }
            }
        }

        let body = if parts.is_empty() {
            String::from("\"\"")
        } else {
            parts.join("+")
        };
        let params = if has_placeholder { "data" } else { "" };
        Ok(format!("function({}){{return {};}}", params, body))
    }
}
