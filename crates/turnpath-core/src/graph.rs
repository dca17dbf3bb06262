//! Value-keyed graphs with optional per-direction links.
//!
//! A [`Graph`] owns its nodes in a flat arena and hands out [`NodeId`]
//! handles; every link between nodes is stored as a handle, so cyclic
//! topologies need no shared ownership. Whether nodes carry a
//! direction table is fixed at construction by [`Topology`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use crate::geom::Direction;

/// Stable handle to a node inside the [`Graph`] that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the graph's arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node capability selected when a graph is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Nodes hold a symmetric neighbour set only.
    Undirected,
    /// Nodes additionally hold at most one outgoing link per [`Direction`].
    Orientational,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undirected => f.write_str("undirected"),
            Self::Orientational => f.write_str("orientational"),
        }
    }
}

/// An operation needed a graph of a different [`Topology`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TopologyError {
    pub expected: Topology,
    pub found: Topology,
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph topology mismatch: expected {} graph, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for TopologyError {}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A graph node: its value, its undirected neighbours and, on
/// orientational graphs, its directed links.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    neighbors: Vec<NodeId>,
    slots: Option<[Option<NodeId>; 4]>,
}

impl<T> Node<T> {
    fn new(value: T, topology: Topology) -> Self {
        let slots = match topology {
            Topology::Undirected => None,
            Topology::Orientational => Some([None; 4]),
        };
        Self {
            value,
            neighbors: Vec::new(),
            slots,
        }
    }

    /// The value identifying this node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Undirected neighbours, each listed once.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Whether this node carries a direction table.
    #[inline]
    pub fn is_orientational(&self) -> bool {
        self.slots.is_some()
    }

    /// The node linked at `dir`, if any.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<NodeId> {
        self.slots.and_then(|s| s[dir.index()])
    }

    /// Occupied direction slots in [`Direction::ALL`] order.
    ///
    /// Yields nothing on undirected nodes.
    pub fn directed_neighbors(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbor(d).map(|id| (d, id)))
    }

    fn add_neighbor(&mut self, id: NodeId) {
        if !self.neighbors.contains(&id) {
            self.neighbors.push(id);
        }
    }

    fn remove_neighbor(&mut self, id: NodeId) {
        self.neighbors.retain(|&n| n != id);
    }

    fn set_slot(&mut self, dir: Direction, to: Option<NodeId>) {
        if let Some(slots) = self.slots.as_mut() {
            slots[dir.index()] = to;
        }
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A graph whose nodes are identified by values of type `T`.
///
/// Nodes are materialized lazily: adding an edge creates any endpoint that
/// does not exist yet. Lookups and removals on unknown values are silent
/// no-ops.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    topology: Topology,
    nodes: Vec<Node<T>>,
    index: HashMap<T, NodeId>,
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// The node capability chosen at construction.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Fail with a [`TopologyError`] unless the graph has `expected` topology.
    pub fn ensure(&self, expected: Topology) -> Result<(), TopologyError> {
        if self.topology == expected {
            Ok(())
        } else {
            Err(TopologyError {
                expected,
                found: self.topology,
            })
        }
    }

    /// Number of materialized nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been materialized yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node behind `id`, or `None` for a handle from another graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// The value of the node behind `id`.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Read-only view over every node, in creation order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

/// Panics if `id` was not handed out by this graph.
impl<T> Index<NodeId> for Graph<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self::with_topology(Topology::Undirected)
    }

    /// Create an empty graph whose nodes carry direction tables.
    pub fn orientational() -> Self {
        Self::with_topology(Topology::Orientational)
    }

    /// Create an empty graph with the given node capability.
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Handle of the node for `value`, if it has been materialized.
    #[inline]
    pub fn node_id<Q>(&self, value: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Whether a node for `value` exists.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// The node for `value`, if it has been materialized.
    pub fn get<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_id(value).and_then(|id| self.node(id))
    }

    /// Return the node for `value`, creating and registering it if needed.
    ///
    /// Repeated calls with an equal value return the same handle and leave
    /// the graph unchanged.
    pub fn get_or_create_node(&mut self, value: T) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value.clone(), self.topology));
        self.index.insert(value, id);
        id
    }

    /// Link `from` and `to` symmetrically, materializing both.
    ///
    /// A self-loop materializes the node but adds no neighbour.
    pub fn add_edge(&mut self, from: T, to: T) {
        let a = self.get_or_create_node(from);
        let b = self.get_or_create_node(to);
        if a == b {
            log::trace!("ignoring self-loop on node {a}");
            return;
        }
        self.nodes[a.0].add_neighbor(b);
        self.nodes[b.0].add_neighbor(a);
    }

    /// Remove the symmetric link between `from` and `to`.
    ///
    /// Does nothing if either value is unknown.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(a), Some(b)) = (self.node_id(from), self.node_id(to)) else {
            return;
        };
        self.nodes[a.0].remove_neighbor(b);
        self.nodes[b.0].remove_neighbor(a);
    }

    /// Set `from ──dir→ to`, and with `bidirectional` also
    /// `to ──dir.opposite()→ from`.
    ///
    /// An occupied slot is overwritten. Self-loops only materialize the
    /// node. Fails on an undirected graph.
    pub fn add_directed_edge(
        &mut self,
        from: T,
        to: T,
        dir: Direction,
        bidirectional: bool,
    ) -> Result<(), TopologyError> {
        self.ensure(Topology::Orientational)?;
        let a = self.get_or_create_node(from);
        let b = self.get_or_create_node(to);
        self.link(a, b, dir, bidirectional);
        Ok(())
    }

    /// Clear the link leaving `from` at `dir`, and with `bidirectional` the
    /// slot at `dir.opposite()` on the former target as well.
    ///
    /// Does nothing if `from` is unknown or the slot is empty. Fails on an
    /// undirected graph.
    pub fn remove_directed_edge<Q>(
        &mut self,
        from: &Q,
        dir: Direction,
        bidirectional: bool,
    ) -> Result<(), TopologyError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ensure(Topology::Orientational)?;
        let Some(a) = self.node_id(from) else {
            return Ok(());
        };
        let Some(b) = self.nodes[a.0].neighbor(dir) else {
            return Ok(());
        };
        self.nodes[a.0].set_slot(dir, None);
        if bidirectional {
            self.nodes[b.0].set_slot(dir.opposite(), None);
        }
        Ok(())
    }

    /// Directed link between two nodes already known to be in this graph.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId, dir: Direction, bidirectional: bool) {
        if a == b {
            log::trace!("ignoring directed self-loop on node {a}");
            return;
        }
        self.nodes[a.0].set_slot(dir, Some(b));
        if bidirectional {
            self.nodes[b.0].set_slot(dir.opposite(), Some(a));
        }
    }
}
