/*!
# Strongly Connected Components

Tarjan's algorithm, run iteratively on an explicit call stack so that deep graphs cannot
overflow the native stack. [`StronglyConnectedComponents`] works on dense indices and
yields one component at a time; [`StronglyConnected`] is the entry point for
[`GraphView`]s.
*/

use std::iter::FusedIterator;

use tracing::debug;

use super::*;

/// Partitions a directed graph into its strongly connected components.
#[derive(Debug, Clone, Copy, Default)]
pub struct StronglyConnected;

impl StronglyConnected {
    pub fn new() -> Self {
        Self
    }

    /// Returns every strongly connected component as a list of identifiers.
    ///
    /// Every node appears in exactly one component. Components are emitted in reverse
    /// topological order of the condensation: a component is listed before every
    /// component that has an edge into it.
    ///
    /// # Errors
    /// [`AlgoError::InvalidArgument`] if the graph is undirected.
    pub fn find_components<G>(&self, graph: &G) -> Result<Vec<Vec<G::NodeId>>>
    where
        G: GraphView,
    {
        if !graph.is_directed() {
            return Err(AlgoError::requires_directed("Strongly connected components"));
        }

        let ag = AlgorithmGraph::new(graph, false);
        let components = StronglyConnectedComponents::new(&ag)
            .map(|component| ag.ids().ids_of(component))
            .collect_vec();

        debug!(
            nodes = ag.len(),
            components = components.len(),
            "strongly connected components found"
        );

        Ok(components)
    }
}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. The first node of each component is its root, i.e. the node of the component that
/// was discovered first. The components are emitted in the reverse topological order of the
/// SCCs (i.e. if each SCC were contracted into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame<'a>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each node that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Like in a DFS computing a spanning forest, every node has to be visited once. Nodes
    /// reachable from earlier roots are covered by `search`; here we look for the next
    /// untouched node and start over from it.
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited as Node;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack, i.e. the first step of a recursive call.
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            has_loop: false,
            neighbors: self.graph.neighbors_of(node),
            position: 0,
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        /*
        Tarjan's algorithm is usually stated recursively. We simulate the recursion with the
        explicit call stack `self.call_stack`: every frame stores its node and the position of
        the next neighbor to inspect. On the first visit a node receives the next DFS index and
        the same low-link. A "recursive call" pushes a frame and restarts the outer loop; once
        a frame has inspected all neighbors it is popped and its low-link is propagated to the
        parent frame. A node whose low-link equals its index is the root of a component, which
        consists of all nodes above it on `self.path_stack`.

        Since all state lives in `self`, we can return a component and resume later on.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as Node;

                self.states[v as usize].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            while let Some(&w) = frame.neighbors.get(frame.position) {
                frame.position += 1;

                let w_state = self.states[w as usize];
                frame.has_loop |= w == v;

                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.index);
                }
            }

            let Some(frame) = self.call_stack.pop() else {
                break;
            };
            let state = self.states[v as usize];

            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if state.is_root() {
                let start = frame.initial_stack_len as usize;

                if !self.include_singletons
                    && self.path_stack.len() == start + 1
                    && !frame.has_loop
                {
                    // singleton without self-loop: only undo the stack
                    self.states[v as usize].on_stack = false;
                    self.path_stack.pop();
                } else {
                    let component = self.path_stack.split_off(start);
                    for &w in &component {
                        self.states[w as usize].on_stack = false;
                    }

                    debug_assert_eq!(component.first(), Some(&v));

                    return Some(component);
                }
            }
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: AdjacencyList {}

#[derive(Debug, Clone)]
struct StackFrame<'a> {
    node: Node,
    parent: Node,
    initial_stack_len: Node,
    first_call: bool,
    has_loop: bool,
    neighbors: &'a [Node],
    position: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl NodeState {
    fn visit(&mut self, u: Node) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components<T: Ord>(mut components: Vec<Vec<T>>) -> Vec<Vec<T>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort();
    components
}
