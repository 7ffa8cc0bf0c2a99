//! Template dispatch: one formatting rule per arity code.

use tracing::debug;

use crate::domain::error::{GenError, GenResult};
use crate::domain::table::NodeSpec;

fn single_param(name: &str) -> String {
    format!("else instance cursorRes{name} :: CursorRes (CTOR.{name} a) ptr (NodeC (AU.T{name} ptr) edge) edge")
}

fn double_param(name: &str) -> String {
    format!("else instance cursorRes{name} :: CursorRes (CTOR.{name} a b) ptr (NodeC (AU.T{name} ptr) edge) edge")
}

fn triple_param(name: &str) -> String {
    format!("else instance cursorRes{name} :: CursorRes (CTOR.{name} a b c) ptr (NodeC (AU.T{name} ptr) edge) edge")
}

/// Lines contributed by one table row.
///
/// Code 1 carries a trailing blank line: the upstream template ends with a
/// newline and the consuming build step concatenates the output byte-for-byte,
/// so the asymmetry stays. Code 3 rows contribute nothing, not even a blank
/// line.
pub fn instance_lines(name: &str, code: u8) -> GenResult<Vec<String>> {
    match code {
        0 => Ok(vec![single_param(name)]),
        1 => Ok(vec![triple_param(name), String::new()]),
        2 => Ok(vec![double_param(name)]),
        3 => Ok(Vec::new()),
        _ => Err(GenError::UnknownArityCode {
            node: name.to_string(),
            code,
        }),
    }
}

/// Renders the instance declarations for every row, in table order.
pub fn render_instances(table: &[NodeSpec]) -> GenResult<Vec<String>> {
    let mut lines = Vec::with_capacity(table.len());
    for spec in table {
        lines.extend(instance_lines(spec.name, spec.arity)?);
    }
    debug!("rendered {} lines from {} nodes", lines.len(), table.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_three_is_silent() {
        assert!(instance_lines("Dup", 3).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_code_names_the_node() {
        let err = instance_lines("Dup", 7).unwrap_err();
        assert_eq!(err.to_string(), "unknown arity code 7 for node: Dup");
    }
}
