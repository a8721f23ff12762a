//! Sample dataset: road distances in miles between seven cities.
//!
//! ```text
//!                    Boston
//!              103.3 /    \ 106.9
//!                   /  51.4 \
//!            Hartford ------ New London
//!         116.3 /    \ 38.9      / 47.8
//!              /80.7  \         /
//!     New York City --- New Haven
//!       20.1 /    \ 25.8
//!           / 53.6 \
//!    Maplewood ---- Garden City
//! ```
//!
//! Every road is stored as two directed edges of equal weight.

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};

pub const CITIES: [&str; 7] = [
    "Boston",
    "Hartford",
    "New London",
    "New York City",
    "New Haven",
    "Maplewood",
    "Garden City",
];

pub const ROADS: [(&str, &str, f64); 20] = [
    ("Boston", "Hartford", 103.3),
    ("Boston", "New London", 106.9),
    ("New London", "Boston", 106.9),
    ("New London", "Hartford", 51.4),
    ("New London", "New Haven", 47.8),
    ("Hartford", "Boston", 103.3),
    ("Hartford", "New London", 51.4),
    ("Hartford", "New Haven", 38.9),
    ("Hartford", "New York City", 116.3),
    ("New Haven", "Hartford", 38.9),
    ("New Haven", "New London", 47.8),
    ("New Haven", "New York City", 80.7),
    ("New York City", "Hartford", 116.3),
    ("New York City", "New Haven", 80.7),
    ("New York City", "Garden City", 25.8),
    ("New York City", "Maplewood", 20.1),
    ("Maplewood", "Garden City", 53.6),
    ("Maplewood", "New York City", 20.1),
    ("Garden City", "Maplewood", 53.6),
    ("Garden City", "New York City", 25.8),
];

/// Build the city graph with any vertex type constructible from a city name
pub fn city_graph<V>() -> Result<WeightedGraph<V>>
where
    V: Vertex + From<&'static str>,
{
    city_graph_with(GraphConfig::default())
}

/// Build the city graph using the given configuration
pub fn city_graph_with<V>(config: GraphConfig) -> Result<WeightedGraph<V>>
where
    V: Vertex + From<&'static str>,
{
    let mut graph = WeightedGraph::with_config(config);
    for city in CITIES {
        graph.add_vertex(V::from(city));
    }
    for (from, to, miles) in ROADS {
        graph.add_edge(V::from(from), V::from(to), miles)?;
    }
    Ok(graph)
}
