//! The shipped node table: WebAudio node type names and their arity codes.

use itertools::Itertools;

use crate::domain::error::{GenError, GenResult};
use crate::domain::template::instance_lines;

/// One table row: a node type name and the arity code selecting its template.
///
/// The code stays a raw `u8` so that a future table edit with a bad value is
/// caught at generation time instead of silently becoming a different enum
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: &'static str,
    pub arity: u8,
}

impl NodeSpec {
    pub const fn new(name: &'static str, arity: u8) -> Self {
        Self { name, arity }
    }
}

/// Declaration order is output order.
pub const WEB_AUDIO_NODES: &[NodeSpec] = &[
    NodeSpec::new("Allpass", 1),
    NodeSpec::new("Bandpass", 1),
    NodeSpec::new("Constant", 0),
    NodeSpec::new("Convolver", 1),
    NodeSpec::new("Delay", 1),
    NodeSpec::new("Dup", 3),
    NodeSpec::new("DynamicsCompressor", 1),
    NodeSpec::new("Gain", 2),
    NodeSpec::new("Highpass", 1),
    NodeSpec::new("Highshelf", 1),
    NodeSpec::new("LoopBuf", 0),
    NodeSpec::new("Lowpass", 1),
    NodeSpec::new("Lowshelf", 1),
    NodeSpec::new("Microphone", 0),
    NodeSpec::new("Notch", 1),
    NodeSpec::new("Peaking", 1),
    NodeSpec::new("PeriodicOsc", 0),
    NodeSpec::new("PlayBuf", 0),
    NodeSpec::new("Recorder", 1),
    NodeSpec::new("SawtoothOsc", 0),
    NodeSpec::new("SinOsc", 0),
    NodeSpec::new("Speaker", 2),
    NodeSpec::new("SquareOsc", 0),
    NodeSpec::new("StereoPanner", 1),
    NodeSpec::new("TriangleOsc", 0),
    NodeSpec::new("WaveShaper", 1),
];

/// Checks that node names are unique and every arity code selects one of the
/// four known templates. The shipped table always passes; this guards future
/// table edits.
pub fn validate(table: &[NodeSpec]) -> GenResult<()> {
    if let Some(name) = table.iter().map(|spec| spec.name).duplicates().next() {
        return Err(GenError::DuplicateNode(name.to_string()));
    }
    for spec in table {
        instance_lines(spec.name, spec.arity)?;
    }
    Ok(())
}
