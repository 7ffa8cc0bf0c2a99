//! Domain layer: the node table and template dispatch
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod error;
pub mod table;
pub mod template;

pub use error::{GenError, GenResult};
pub use table::{NodeSpec, WEB_AUDIO_NODES};
pub use template::{instance_lines, render_instances};
