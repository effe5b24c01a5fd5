//! Depth-first cycle detection over an explicit stack
//!
//! [`has_cycle`] uses directed semantics over whatever is stored. A graph
//! built with undirected insertion stores every edge both ways, so the
//! reverse entry of any edge between two distinct vertices is a back edge
//! and `has_cycle` reports a cycle. [`has_undirected_cycle`] is the
//! undirected-aware alternative for such graphs.

use std::collections::BTreeSet;

use crate::graph::GraphProvider;

/// One vertex on the explicit DFS stack and the index of the next
/// neighbor entry to examine
struct Frame<'a, V> {
    vertex: &'a V,
    parent: Option<&'a V>,
    next: usize,
    skipped_parent: bool,
}

impl<'a, V> Frame<'a, V> {
    fn new(vertex: &'a V, parent: Option<&'a V>) -> Self {
        Self {
            vertex,
            parent,
            next: 0,
            skipped_parent: false,
        }
    }
}

/// True if a depth-first search finds an edge back to a vertex that is
/// still on the DFS stack. Roots are tried in the provider's vertex
/// enumeration order. The search keeps its own stack, so path length is
/// bounded by memory rather than by the thread stack.
#[tracing::instrument(skip(provider))]
pub fn has_cycle<P, V>(provider: &P) -> bool
where
    P: GraphProvider<V> + ?Sized,
    V: Ord,
{
    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut on_stack: BTreeSet<&V> = BTreeSet::new();
    let mut stack: Vec<Frame<'_, V>> = Vec::new();

    for root in provider.vertices() {
        if !visited.insert(root) {
            continue;
        }
        on_stack.insert(root);
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let node = frame.vertex;
            let Some(neighbor) = provider.neighbors(node).get(frame.next) else {
                on_stack.remove(node);
                stack.pop();
                continue;
            };
            frame.next += 1;

            let target = &neighbor.vertex;
            if on_stack.contains(target) {
                tracing::debug!(depth = stack.len(), "back_edge_found");
                return true;
            }
            if visited.insert(target) {
                on_stack.insert(target);
                stack.push(Frame::new(target, Some(node)));
            }
        }
    }

    false
}

/// Cycle check for graphs whose edges were inserted as undirected.
///
/// While exploring from a vertex, exactly one entry leading back to the
/// vertex it was reached from is ignored (the reverse half of the edge just
/// used). Any other entry to an already visited vertex closes a cycle, so a
/// lone undirected edge is acyclic while a triangle, a parallel edge or a
/// self-loop is not. On graphs with one-way edges this can report cycles
/// that do not exist under directed semantics.
#[tracing::instrument(skip(provider))]
pub fn has_undirected_cycle<P, V>(provider: &P) -> bool
where
    P: GraphProvider<V> + ?Sized,
    V: Ord,
{
    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut stack: Vec<Frame<'_, V>> = Vec::new();

    for root in provider.vertices() {
        if !visited.insert(root) {
            continue;
        }
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let node = frame.vertex;
            let Some(neighbor) = provider.neighbors(node).get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let target = &neighbor.vertex;
            if !frame.skipped_parent && frame.parent == Some(target) {
                frame.skipped_parent = true;
                continue;
            }
            if !visited.insert(target) {
                tracing::debug!(depth = stack.len(), "undirected_cycle_found");
                return true;
            }
            stack.push(Frame::new(target, Some(node)));
        }
    }

    false
}
