//! Generic directed-graph library
//!
//! `DiGraph` stores integer vertices with unlabeled directed edges in
//! ordered containers, so neighbor expansion is deterministic (ascending
//! id). All traversals are iterative with explicit queues/stacks; there
//! is no recursion to hit call-depth limits on large graphs.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::error::{Result, WarrenError};

/// Identifier of a vertex, unique within a graph
pub type VertexId = u32;

/// A directed graph over integer vertices
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    vertices: BTreeMap<VertexId, BTreeSet<VertexId>>,
}

impl DiGraph {
    pub fn new() -> DiGraph {
        DiGraph::default()
    }

    /// Add a vertex with no edges; adding an existing vertex is a no-op
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.vertices.entry(vertex).or_default();
    }

    /// Add a directed edge; both endpoints must already exist
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&to) {
            return Err(WarrenError::VertexNotFound { id: to });
        }
        let edges = self
            .vertices
            .get_mut(&from)
            .ok_or(WarrenError::VertexNotFound { id: from })?;
        edges.insert(to);
        Ok(())
    }

    /// Outgoing neighbors of a vertex, in ascending id order
    pub fn neighbors(&self, vertex: VertexId) -> Result<&BTreeSet<VertexId>> {
        self.vertices
            .get(&vertex)
            .ok_or(WarrenError::VertexNotFound { id: vertex })
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate vertex ids in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }
}

/// Breadth-first visit order from `start`
pub fn bft(graph: &DiGraph, start: VertexId) -> Result<Vec<VertexId>> {
    let mut order = Vec::new();
    let mut visited: HashSet<VertexId> = HashSet::from([start]);
    let mut queue: VecDeque<VertexId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in graph.neighbors(current)? {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(order)
}

/// Depth-first visit order from `start`, lowest-id neighbor first
pub fn dft(graph: &DiGraph, start: VertexId) -> Result<Vec<VertexId>> {
    let mut order = Vec::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        // pushed in reverse so the smallest neighbor is popped first
        for &next in graph.neighbors(current)?.iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
    Ok(order)
}

/// Shortest path from `start` to `dest`, or `None` when unreachable
pub fn bfs_path(graph: &DiGraph, start: VertexId, dest: VertexId) -> Result<Option<Vec<VertexId>>> {
    if !graph.contains(dest) {
        return Err(WarrenError::VertexNotFound { id: dest });
    }
    if start == dest {
        graph.neighbors(start)?;
        return Ok(Some(vec![start]));
    }

    let mut predecessors: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    let mut visited: HashSet<VertexId> = HashSet::from([start]);
    let mut queue: VecDeque<VertexId> = VecDeque::from([start]);

    'search: while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current)? {
            if visited.insert(next) {
                predecessors.insert(next, current);
                if next == dest {
                    break 'search;
                }
                queue.push_back(next);
            }
        }
    }

    Ok(reconstruct(&predecessors, start, dest))
}

/// Some path from `start` to `dest` found depth-first, or `None`
pub fn dfs_path(graph: &DiGraph, start: VertexId, dest: VertexId) -> Result<Option<Vec<VertexId>>> {
    if !graph.contains(dest) {
        return Err(WarrenError::VertexNotFound { id: dest });
    }
    if start == dest {
        graph.neighbors(start)?;
        return Ok(Some(vec![start]));
    }

    let mut predecessors: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![start];

    'search: while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for &next in graph.neighbors(current)?.iter().rev() {
            if !visited.contains(&next) {
                predecessors.entry(next).or_insert(current);
                if next == dest {
                    break 'search;
                }
                stack.push(next);
            }
        }
    }

    Ok(reconstruct(&predecessors, start, dest))
}

fn reconstruct(
    predecessors: &BTreeMap<VertexId, VertexId>,
    start: VertexId,
    dest: VertexId,
) -> Option<Vec<VertexId>> {
    if !predecessors.contains_key(&dest) {
        return None;
    }
    let mut path = vec![dest];
    let mut current = dest;
    while current != start {
        current = predecessors[&current];
        path.push(current);
    }
    path.reverse();
    Some(path)
}
