use std::collections::BTreeSet;

use crate::graph::GraphProvider;

/// Recursive depth-first pre-order from `start`; each vertex appears once
#[tracing::instrument(skip(provider, start))]
pub fn dfs_recursive<P, V>(provider: &P, start: &V) -> Vec<V>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone,
{
    fn visit<'a, P, V>(provider: &'a P, node: &'a V, visited: &mut BTreeSet<&'a V>, out: &mut Vec<V>)
    where
        P: GraphProvider<V> + ?Sized,
        V: Ord + Clone,
    {
        visited.insert(node);
        out.push(node.clone());

        for neighbor in provider.neighbors(node) {
            if !visited.contains(&neighbor.vertex) {
                visit(provider, &neighbor.vertex, visited, out);
            }
        }
    }

    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    visit(provider, start, &mut visited, &mut order);

    tracing::debug!(visited = order.len(), "dfs_recursive");
    order
}

/// Depth-first pre-order using an explicit stack
///
/// Neighbors are pushed in reverse list order so they pop in list order,
/// which matches [`dfs_recursive`]. A vertex may sit on the stack more than
/// once but is recorded only the first time it is popped.
#[tracing::instrument(skip(provider, start))]
pub fn dfs_iterative<P, V>(provider: &P, start: &V) -> Vec<V>
where
    P: GraphProvider<V> + ?Sized,
    V: Ord + Clone,
{
    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut stack: Vec<&V> = vec![start];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        for neighbor in provider.neighbors(current).iter().rev() {
            if !visited.contains(&neighbor.vertex) {
                stack.push(&neighbor.vertex);
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs_iterative");
    order
}
