use crate::data::model::{ParamRef, ParamSchema};
use crate::error::DefaultExprError;

/// Short identity of a parameter for human-readable labels, e.g.
/// `"threshold@readout/"`.
pub fn format_param_identity(param: &ParamRef) -> String {
    let path = if param.path.is_empty() {
        "/"
    } else {
        param.path.as_str()
    };
    let short_fqn = param.param.fqn.rsplit('.').next().unwrap_or_default();
    format!("{short_fqn}@{path}")
}

/// Dataset keys read via `dataset(...)` in the default expression of `schema`,
/// in order of appearance.
///
/// Expressions that cannot be scanned yield no datasets; the parameter editor
/// reports those errors with more context.
pub fn extract_linked_datasets(schema: &ParamSchema) -> Vec<String> {
    match scan_dataset_keys(&schema.default) {
        Ok(keys) => keys,
        Err(e) => {
            log::debug!("Not scanning default of '{}' for datasets: {e}", schema.fqn);
            Vec::new()
        }
    }
}

fn scan_dataset_keys(expr: &str) -> Result<Vec<String>, DefaultExprError> {
    let bytes = expr.as_bytes();
    let mut keys = Vec::new();
    let mut depth = 0usize;
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        match c {
            b'"' | b'\'' => {
                let (_, end) = string_literal(expr, pos)?;
                pos = end;
            }
            b'(' => {
                depth += 1;
                pos += 1;
            }
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(DefaultExprError::UnbalancedParen(pos))?;
                pos += 1;
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                    pos += 1;
                }
                let is_attribute = start > 0 && bytes[start - 1] == b'.';
                if &expr[start..pos] != "dataset" || is_attribute {
                    continue;
                }
                let open = skip_whitespace(bytes, pos);
                if bytes.get(open) != Some(&b'(') {
                    continue;
                }
                depth += 1;
                let arg = skip_whitespace(bytes, open + 1);
                match bytes.get(arg) {
                    Some(b'"') | Some(b'\'') => {
                        let (key, end) = string_literal(expr, arg)?;
                        keys.push(key);
                        pos = end;
                    }
                    _ => return Err(DefaultExprError::NonLiteralKey(arg)),
                }
            }
            _ => pos += 1,
        }
    }

    if depth != 0 {
        return Err(DefaultExprError::UnbalancedParen(bytes.len()));
    }
    Ok(keys)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Decode the quoted literal starting at `start`; returns the contents and the
/// position just past the closing quote.
fn string_literal(expr: &str, start: usize) -> Result<(String, usize), DefaultExprError> {
    let mut chars = expr[start..].char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(DefaultExprError::UnterminatedString(start));
    };

    let mut value = String::new();
    while let Some((offset, c)) = chars.next() {
        if c == quote {
            return Ok((value, start + offset + c.len_utf8()));
        }
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => value.push('\n'),
            Some((_, 't')) => value.push('\t'),
            Some((_, escaped @ ('\\' | '\'' | '"'))) => value.push(escaped),
            Some((_, other)) => {
                value.push('\\');
                value.push(other);
            }
            None => break,
        }
    }
    Err(DefaultExprError::UnterminatedString(start))
}
