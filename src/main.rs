use labeled_graph::{AdjacencyMapGraph, EditableGraph, GraphResult, LabeledEdge, LabeledVertex};

fn main() -> GraphResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Labeled Graph v{}", labeled_graph::version());
    println!("==========================================");
    println!();

    let mut graph: AdjacencyMapGraph<String, f64> = AdjacencyMapGraph::new();

    let vs = [
        graph.add_vertex("pierwszy".to_string()),
        graph.add_vertex("następny".to_string()),
        graph.add_vertex("kolejny".to_string()),
        graph.add_vertex("ostatni".to_string()),
    ];

    graph.add_edge(vs[0], vs[1], 35.0)?;
    graph.add_edge(vs[0], vs[3], 15.1)?;
    graph.add_edge(vs[1], vs[2], 12.9)?;
    graph.add_edge(vs[3], vs[2], -1.3)?;
    graph.add_edge(vs[3], vs[0], 125.0)?;
    graph.add_edge(vs[2], vs[0], 5.5)?;

    println!("{}", graph);
    println!("-----");

    if let Some(vertex) = graph.vertex_mut(vs[2]) {
        vertex.set_label("zmieniony".to_string());
    }
    if let Some(edge) = graph.get_edge_mut(vs[2], vs[0])? {
        edge.set_label(34.0);
    }
    graph.remove_edge(vs[3], vs[0])?;
    graph.remove_vertex(vs[1]);

    println!("{}", graph);
    Ok(())
}
