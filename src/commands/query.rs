//! Query command handlers
//!
//! Results are listed in graph insertion order so human and JSON output are
//! stable between runs.

use serde::Serialize;
use waygraph_core::error::{GraphError, Result};
use waygraph_core::format::format_weight;
use waygraph_core::{CostTable, ParentTree, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

type Graph = WeightedGraph<String>;

#[derive(Serialize)]
struct NeighborRow<'a> {
    vertex: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct TreeRow<'a> {
    vertex: &'a str,
    parent: Option<&'a str>,
}

#[derive(Serialize)]
struct CostRow<'a> {
    vertex: &'a str,
    /// `None` when the vertex is unreachable
    distance: Option<f64>,
    predecessor: Option<&'a str>,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tree rows in graph order, skipping vertices the tree does not contain
fn tree_rows<'a>(graph: &'a Graph, tree: &'a ParentTree<String>) -> Vec<TreeRow<'a>> {
    graph
        .vertices()
        .filter_map(|vertex| {
            tree.get(vertex).map(|parent| TreeRow {
                vertex,
                parent: parent.as_deref(),
            })
        })
        .collect()
}

fn cost_rows<'a>(graph: &'a Graph, table: &'a CostTable<String>) -> Vec<CostRow<'a>> {
    graph
        .vertices()
        .filter_map(|vertex| {
            table.get(vertex).map(|entry| CostRow {
                vertex,
                distance: entry.is_reachable().then_some(entry.distance),
                predecessor: entry.predecessor.as_deref(),
            })
        })
        .collect()
}

pub fn vertices(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for vertex in graph {
                println!("{}", vertex);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&graph.vertices().collect::<Vec<_>>()),
    }
}

pub fn neighbors(cli: &Cli, graph: &Graph, vertex: &String) -> Result<()> {
    if !graph.contains_vertex(vertex) {
        return Err(GraphError::vertex_not_found(vertex));
    }

    let rows = graph
        .neighbors(vertex)
        .map(|n| {
            Ok(NeighborRow {
                vertex: n,
                weight: graph.weight(vertex, n)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match cli.format {
        OutputFormat::Human => {
            for row in &rows {
                println!("{}\t{}", row.vertex, format_weight(row.weight));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "vertex": vertex,
            "neighbors": rows,
        })),
    }
}

pub fn weight(cli: &Cli, graph: &Graph, from: &String, to: &String) -> Result<()> {
    let weight = graph.weight(from, to)?;

    match cli.format {
        OutputFormat::Human => {
            println!("{}", format_weight(weight));
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "weight": weight,
        })),
    }
}

pub fn fewest_edges(cli: &Cli, graph: &Graph, source: &String) -> Result<()> {
    let tree = graph.fewest_edges(source)?;
    let rows = tree_rows(graph, &tree);

    match cli.format {
        OutputFormat::Human => {
            for row in &rows {
                match row.parent {
                    Some(parent) => println!("{} <- {}", row.vertex, parent),
                    None => println!("{} (source)", row.vertex),
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "tree": rows,
        })),
    }
}

pub fn lowest_cost(cli: &Cli, graph: &Graph, source: &String) -> Result<()> {
    let table = graph.lowest_cost(source)?;
    let rows = cost_rows(graph, &table);

    match cli.format {
        OutputFormat::Human => {
            for row in &rows {
                match (row.distance, row.predecessor) {
                    (None, _) => println!("{}: unreachable", row.vertex),
                    (Some(distance), Some(pred)) => {
                        println!("{}: {} via {}", row.vertex, format_weight(distance), pred)
                    }
                    (Some(distance), None) => {
                        println!("{}: {} (source)", row.vertex, format_weight(distance))
                    }
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "table": rows,
        })),
    }
}

pub fn lowest_total(cli: &Cli, graph: &Graph, source: &String) -> Result<()> {
    let tree = graph.lowest_total(source)?;
    let rows = tree_rows(graph, &tree.parents);

    match cli.format {
        OutputFormat::Human => {
            for row in &rows {
                match row.parent {
                    Some(parent) => {
                        let weight = graph.weight(&parent.to_string(), &row.vertex.to_string())?;
                        println!("{} <- {} ({})", row.vertex, parent, format_weight(weight));
                    }
                    None => println!("{} (root)", row.vertex),
                }
            }
            println!("total: {}", format_weight(tree.total_weight));
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "total_weight": tree.total_weight,
            "tree": rows,
        })),
    }
}
