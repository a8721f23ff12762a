//! Error macros for waygraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for returning a missing vertex error unless the graph holds the vertex
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains_vertex($vertex) {
            return Err($crate::error::GraphError::vertex_not_found($vertex));
        }
    };
}
