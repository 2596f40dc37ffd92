//! A variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which keeps one record per node in an insertion-ordered arena and breaks ties between equally
//! promising nodes deterministically.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the largest cost (the node closest to
        // the goal), then the entry pushed first
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Best known way to reach a node.
struct SearchNode<C> {
    parent: usize,
    cost: C,
    heuristic: C,
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        nodes
            .get_index(i)
            .map(|(_, node)| node.parent)
            .filter(|&parent| parent != NO_PARENT)
    })
    .filter_map(|i| nodes.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Best-first search from `start` until a node satisfying `success` is popped. Returns the path
/// including both endpoints together with its cost, or [None] once every reachable node has been
/// settled. The heuristic is evaluated once per discovered node.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    let start_heuristic = heuristic(start);
    to_see.push(SmallestCostHolder {
        estimated_cost: start_heuristic,
        cost: Zero::zero(),
        index: 0,
        sequence,
    });
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: NO_PARENT,
            cost: Zero::zero(),
            heuristic: start_heuristic,
        },
    );
    let mut expanded = 0_usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, record)) = nodes.get_index(index) else {
                continue;
            };
            // A node is pushed again every time a cheaper way to it is found. Only the entry
            // matching its best cost is expanded, the others are discarded.
            if cost > record.cost {
                continue;
            }
            if success(node) {
                let path = reverse_path(&nodes, index);
                debug!(
                    "Path of {} nodes found after expanding {} of {} discovered nodes",
                    path.len(),
                    expanded,
                    nodes.len()
                );
                return Some((path, cost));
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        cost: new_cost,
                        heuristic: h,
                    });
                }
                Occupied(mut e) => {
                    if e.get().cost > new_cost {
                        n = e.index();
                        let record = e.get_mut();
                        record.parent = index;
                        record.cost = new_cost;
                        h = record.heuristic;
                    } else {
                        continue;
                    }
                }
            }

            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                sequence,
            });
        }
    }
    debug!(
        "Search exhausted after expanding {} of {} discovered nodes",
        expanded,
        nodes.len()
    );
    None
}
