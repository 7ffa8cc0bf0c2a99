//! Generator for WebAudio cursor-resolution instance declarations.
//!
//! A fixed table maps WebAudio node type names to an arity code in {0,1,2,3};
//! each code selects one output template. Generation is a single pass over
//! the table in declaration order.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::error::{GenError, GenResult};
pub use domain::table::{NodeSpec, WEB_AUDIO_NODES};
pub use domain::template::{instance_lines, render_instances};

/// Joins the rendered lines into the text block the `generate` command
/// writes. Every line, including the code-1 blank separators, is terminated
/// with a newline, so repeated runs are byte-identical.
pub fn build_instance_text(table: &[NodeSpec]) -> GenResult<String> {
    let mut text = String::new();
    for line in render_instances(table)? {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}
