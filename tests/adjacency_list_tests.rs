use std::collections::BTreeSet;

use anyhow::Result;
use grapphs::{AdjacencyList, Graph, GraphError, GraphView, Index};

#[test]
fn removal_hides_vertex_from_iteration() -> Result<()> {
    let mut graph = AdjacencyList::<i32, f32>::new();
    graph.push(0);
    let to_be_removed = graph.push(1);
    graph.push(2);
    assert_eq!(graph.size(), 3);

    assert_eq!(graph.remove(to_be_removed)?, Some(1));
    assert_eq!(graph.size(), 2);

    let mut expected: BTreeSet<i32> = [0, 2].into_iter().collect();
    let mut iterations = 0;
    for (_, vertex) in graph.all_vertices() {
        assert_ne!(*vertex, 1);
        assert!(expected.remove(vertex), "vertex {vertex} was not found in pending set");
        iterations += 1;
    }
    assert_eq!(iterations, 2);
    Ok(())
}

#[test]
fn size_tracks_pushes_and_removals() -> Result<()> {
    let mut graph = AdjacencyList::<u64, ()>::new();
    let indices: Vec<Index> = (0..10).map(|value| graph.push(value)).collect();
    assert_eq!(indices, (0..10).collect::<Vec<_>>());

    for &index in indices.iter().step_by(3) {
        graph.remove(index)?;
    }
    assert_eq!(graph.size(), 6);
    assert_eq!(graph.capacity(), 10);

    // Freed slots come back in removal order before the table grows.
    let reused: Vec<Index> = (0..5).map(|value| graph.push(100 + value)).collect();
    assert_eq!(reused, vec![0, 3, 6, 9, 10]);
    assert_eq!(graph.size(), 11);
    Ok(())
}

#[test]
fn reused_slot_starts_without_edges() -> Result<()> {
    let mut graph = AdjacencyList::<&str, u8>::new();
    let a = graph.push("a");
    let b = graph.push("b");
    let c = graph.push("c");
    graph.connect(b, a, 1)?;
    graph.connect(b, c, 2)?;
    graph.connect(a, b, 3)?;

    graph.remove(b)?;
    let d = graph.push("d");
    assert_eq!(d, b);
    assert_eq!(graph.vertex(d)?, &"d");
    assert!(graph.edges_from(d).is_empty());
    // The edge into the old occupant now leads to the new one.
    assert_eq!(graph.edge(a, d), Some(&3));
    Ok(())
}

#[test]
fn errors_name_index_and_capacity() {
    let mut graph = AdjacencyList::<(), ()>::with_capacity(8);
    graph.push(());
    graph.push(());

    let err = graph.connect(0, 2, ()).unwrap_err();
    assert_eq!(err, GraphError::IndexOutOfRange { index: 2, capacity: 2 });
    assert_eq!(err.to_string(), "vertex index 2 is out of range for capacity 2");

    assert!(graph.vertex(2).is_err());
    assert!(graph.remove(5).is_err());
    assert!(graph.edge(7, 0).is_none());
    assert!(graph.edges_from(7).is_empty());
}

#[test]
fn debug_reports_counts() -> Result<()> {
    let mut graph: AdjacencyList<char, ()> = "xyz".chars().collect();
    graph.connect(0, 1, ())?;
    graph.remove(2)?;
    assert_eq!(
        format!("{graph:?}"),
        "AdjacencyList { size: 2, capacity: 3, edges: 1 }"
    );
    Ok(())
}

/// Exercises the storage engine only through the trait surface.
fn ring<G>(graph: &mut G, len: usize) -> Result<Vec<Index>>
where
    G: Graph<Vertex = usize, Edge = f64>,
{
    let indices: Vec<Index> = (0..len).map(|value| graph.push(value)).collect();
    for (position, &from) in indices.iter().enumerate() {
        let to = indices[(position + 1) % len];
        graph.connect(from, to, 1.0)?;
    }
    Ok(indices)
}

#[test]
fn graph_trait_surface() -> Result<()> {
    let mut graph = AdjacencyList::<usize, f64>::new();
    let indices = ring(&mut graph, 4)?;

    assert_eq!(Graph::size(&graph), 4);
    assert!(!Graph::is_empty(&graph));
    assert!(graph.contains_edge(indices[3], indices[0]));
    assert!(!graph.contains_edge(indices[0], indices[3]));
    assert_eq!(graph.get_vertex(9), None);

    *Graph::edge_mut(&mut graph, indices[0], indices[1]).unwrap() = 2.5;
    assert_eq!(Graph::edge(&graph, indices[0], indices[1]), Some(&2.5));
    assert!(Graph::disconnect(&mut graph, indices[0], indices[1]));
    assert_eq!(Graph::remove(&mut graph, indices[2])?, Some(2));

    let live: Vec<Index> = Graph::all_vertices(&graph).map(|(index, _)| index).collect();
    assert_eq!(live, vec![0, 1, 3]);

    let view = GraphView::new(&graph, [3, 1])?;
    let values: Vec<usize> = view.iter().map(|(_, value)| *value).collect();
    assert_eq!(values, vec![3, 1]);
    Ok(())
}

#[test]
fn graph_is_shareable_across_threads() -> Result<()> {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdjacencyList<String, f64>>();

    let mut graph: AdjacencyList<usize, ()> = (0..64).collect();
    for index in 1..64 {
        graph.connect(index / 2, index, ())?;
    }

    let reached: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = [1, 2, 3]
            .into_iter()
            .map(|origin| {
                let graph = &graph;
                scope.spawn(move || grapphs::Bfs::new(graph, [origin]).vertices().count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap_or(0)).collect()
    });
    assert_eq!(reached, vec![63, 31, 31]);
    Ok(())
}
