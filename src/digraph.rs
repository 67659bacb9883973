//! Directed graph over dense integer node ids, with multi-source reachability.
//!
//! Nodes are `0..node_count` and are never removed. Edges live in per-node
//! adjacency lists, so cycles (including self-loops) need no special handling
//! beyond the visited marks used during traversal.

use crate::util::DebugCheckIndex;
use core::fmt;

/// A directed graph with a fixed node count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    // Successors of each node, in insertion order.
    adj: Box<[Vec<usize>]>,
    edge_count: usize,
}

impl Digraph {
    /// Construct a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); node_count].into_boxed_slice(),
            edge_count: 0,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the edge `from -> to`. Parallel edges are kept.
    /// Panics if either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.node_count();
        assert!(
            from < n && to < n,
            "edge {} -> {} out of range for {} nodes",
            from,
            to,
            n
        );
        self.adj[from].push(to);
        self.edge_count += 1;
    }

    /// \return the successors of `node`, in the order their edges were added.
    #[inline]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// \return a copy of this graph with every edge reversed.
    pub fn reverse(&self) -> Digraph {
        let mut rev = Digraph::new(self.node_count());
        for (from, succs) in self.adj.iter().enumerate() {
            for &to in succs {
                rev.add_edge(to, from);
            }
        }
        rev
    }

    /// \return the set of nodes reachable from `source` by zero or more edges.
    #[inline]
    pub fn reachable_from(&self, source: usize) -> StateSet {
        self.reachable(core::iter::once(source))
    }

    /// \return the set of nodes reachable from any node in `sources` by
    /// following zero or more edges. Sources are themselves members of the
    /// result. Panics if a source is not a node of this graph.
    pub fn reachable<I>(&self, sources: I) -> StateSet
    where
        I: IntoIterator<Item = usize>,
    {
        let mut seen = StateSet::new(self.node_count());
        let mut work = Vec::new();
        for src in sources {
            assert!(
                src < self.node_count(),
                "source {} out of range for {} nodes",
                src,
                self.node_count()
            );
            if seen.insert(src) {
                work.push(src);
            }
        }

        // Depth-first with an explicit stack. Every node is pushed at most once.
        while let Some(node) = work.pop() {
            for &next in self.adj.iat(node) {
                if seen.insert(next) {
                    work.push(next);
                }
            }
        }
        seen
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.node_count(),
            self.edge_count()
        )?;
        for (node, succs) in self.adj.iter().enumerate() {
            write!(f, "{}:", node)?;
            for next in succs {
                write!(f, " {}", next)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A set of automaton states (graph nodes), stored densely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSet {
    marked: Box<[bool]>,
    len: usize,
}

impl StateSet {
    /// Construct an empty set able to hold nodes `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            marked: vec![false; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Add `node`, returning true if it was not already present.
    #[inline]
    pub fn insert(&mut self, node: usize) -> bool {
        let slot = &mut self.marked[node];
        if *slot {
            false
        } else {
            *slot = true;
            self.len += 1;
            true
        }
    }

    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.marked.get(node).copied().unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(node, &m)| if m { Some(node) } else { None })
    }
}
