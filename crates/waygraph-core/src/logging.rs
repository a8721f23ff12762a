use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Work counters for a single traversal.
///
/// Each query fills one of these while it runs and logs it at debug level
/// when it finishes, so slow queries can be told apart by how much of the
/// graph they touched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalMetrics {
    /// Vertices settled (dequeued and expanded)
    vertices_settled: u64,
    /// Edges examined while expanding settled vertices
    edges_scanned: u64,
    /// Tentative results improved (distance relaxations, tree edges taken)
    improvements: u64,
}

impl TraversalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_settled(&mut self) {
        self.vertices_settled += 1;
    }

    pub fn record_scanned(&mut self) {
        self.edges_scanned += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    pub fn vertices_settled(&self) -> u64 {
        self.vertices_settled
    }

    pub fn edges_scanned(&self) -> u64 {
        self.edges_scanned
    }

    pub fn improvements(&self) -> u64 {
        self.improvements
    }
}

/// Log traversal metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut metrics = TraversalMetrics::new();
/// // ... record some work ...
/// log_traversal_metrics!(&metrics, "lowest_cost");
/// ```
#[macro_export]
macro_rules! log_traversal_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            vertices_settled = $metrics.vertices_settled(),
            edges_scanned = $metrics.edges_scanned(),
            improvements = $metrics.improvements(),
            "traversal_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "waygraph=debug,waygraph_core=debug",
        (false, None) => "waygraph=warn,waygraph_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Build the filter directive for a bare level such as `info`
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("waygraph={level},waygraph_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // WAYGRAPH_LOG overrides the CLI-derived filter
    let filter = EnvFilter::try_from_env("WAYGRAPH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive_for(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counters() {
        let mut metrics = TraversalMetrics::new();
        metrics.record_settled();
        metrics.record_scanned();
        metrics.record_scanned();
        metrics.record_improvement();

        assert_eq!(metrics.vertices_settled(), 1);
        assert_eq!(metrics.edges_scanned(), 2);
        assert_eq!(metrics.improvements(), 1);
    }

    #[test]
    fn test_directive_for_bare_level() {
        assert_eq!(directive_for("info"), "waygraph=info,waygraph_core=info");
        assert_eq!(directive_for("waygraph_core=trace"), "waygraph_core=trace");
    }
}
