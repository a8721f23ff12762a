//! Value parsers for CLI arguments

use waygraph_core::bail_invalid;
use waygraph_core::error::Result;

/// Directed edge named on the command line as `FROM:TO`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

/// Parse `FROM:TO`, trimming whitespace around both vertex names
pub fn parse_edge_spec(s: &str) -> Result<EdgeSpec> {
    let Some((from, to)) = s.split_once(':') else {
        bail_invalid!("edge (expected FROM:TO)", s);
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        bail_invalid!("edge (expected FROM:TO)", s);
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
    })
}
