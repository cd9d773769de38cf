use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::graph::{Edge, EdgeKind, Graph};
use crate::station::StationId;

/// Outcome of a shortest-path query.
///
/// An unreachable target (or an unknown endpoint) is reported as an empty
/// path with infinite cost rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Sum of the search weights along `steps`.
    pub cost: f64,
    /// Station ids from source to target inclusive.
    pub steps: Vec<StationId>,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            cost: f64::INFINITY,
            steps: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Physical metrics of a concrete path, independent of the search weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PathMetrics {
    /// Total distance in km.
    pub distance: f64,
    /// Number of interchange edges traversed.
    pub interchanges: usize,
}

/// Run Dijkstra's algorithm from `source` to `target`, pricing each edge with
/// `weight`.
///
/// `weight` must return non-negative values. The search stops as soon as the
/// target is settled. Among equal-cost paths the result is whichever the
/// frontier settles first.
pub fn find_path<W>(graph: &Graph, source: StationId, target: StationId, weight: W) -> PathResult
where
    W: Fn(&Edge) -> f64,
{
    if !graph.contains(source) || !graph.contains(target) {
        return PathResult::not_found();
    }

    if source == target {
        return PathResult {
            cost: 0.0,
            steps: vec![source],
        };
    }

    let mut costs: HashMap<StationId, f64> = HashMap::new();
    let mut parents: HashMap<StationId, Option<StationId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    costs.insert(source, 0.0);
    parents.insert(source, None);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let current_cost = match costs.get(&entry.node) {
            Some(cost) if *cost < entry.cost.0 => continue,
            Some(cost) => *cost,
            None => continue,
        };

        if entry.node == target {
            return PathResult {
                cost: current_cost,
                steps: reconstruct_path(&parents, source, target),
            };
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = current_cost + weight(edge);
            if next_cost < *costs.get(&next).unwrap_or(&f64::INFINITY) {
                costs.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    PathResult::not_found()
}

/// Recompute distance and interchange count from the edges on `steps`.
///
/// Each consecutive pair uses [`Graph::edge_between`], i.e. the first matching
/// edge in adjacency order. Pairs without a connecting edge contribute nothing.
pub fn derive_metrics(graph: &Graph, steps: &[StationId]) -> PathMetrics {
    let mut metrics = PathMetrics::default();
    for pair in steps.windows(2) {
        if let Some(edge) = graph.edge_between(pair[0], pair[1]) {
            metrics.distance += edge.distance;
            if edge.kind == EdgeKind::Interchange {
                metrics.interchanges += 1;
            }
        }
    }
    metrics
}

fn reconstruct_path(
    parents: &HashMap<StationId, Option<StationId>>,
    start: StationId,
    goal: StationId,
) -> Vec<StationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: StationId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: StationId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
