//! Media inspection helpers.

mod probe;

pub use probe::{parse_probe_output, probe_duration, ProbeError};
