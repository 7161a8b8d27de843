//! Depth-first traversal in finish order
//!
//! A node is pushed onto the result stack only after every neighbor reachable
//! from it has been fully explored (post-order). Roots are taken in `nodes()`
//! order. Traversal keeps an explicit frame stack, so graph depth is not
//! limited by the thread stack.

use crate::errors::Result;
use crate::features::graph::domain::{Adjacency, Graph};
use crate::features::id_set::{HashIdSet, IdSet};

/// Finish-order stack for a traversal of the whole graph
///
/// The last element finished last (it is the top of the stack).
pub fn finish_order(graph: &dyn Graph) -> Result<Vec<u32>> {
    let mut visited = HashIdSet::with_capacity(graph.node_count());
    let mut stack = Vec::with_capacity(graph.node_count());

    for root in graph.nodes().iter() {
        if !visited.contains(root) {
            dfs_from(graph, root, &mut visited, &mut stack)?;
        }
    }

    Ok(stack)
}

/// Traverse from one root, skipping `visited` nodes.
///
/// Every newly reached node is added to `visited` and, once finished, pushed
/// onto `stack`.
pub fn dfs_from(
    graph: &dyn Graph,
    start: u32,
    visited: &mut HashIdSet,
    stack: &mut Vec<u32>,
) -> Result<()> {
    let mut frames: Vec<(u32, Adjacency<'_>)> = Vec::new();
    visited.add(start);
    frames.push((start, graph.adjacent(start)?));

    while let Some((node, neighbors)) = frames.last_mut() {
        match neighbors.find(|next| !visited.contains(*next)) {
            Some(next) => {
                visited.add(next);
                let adjacency = graph.adjacent(next)?;
                frames.push((next, adjacency));
            }
            None => {
                stack.push(*node);
                frames.pop();
            }
        }
    }

    Ok(())
}
