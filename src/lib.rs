/*!
`lgraphs` is a library of classical graph algorithms for **l**abelled graphs: nodes carry
arbitrary identifiers and edges carry arbitrary attribute bags. The library never owns the
graph. It consumes any storage implementing the read-only [`GraphView`](ops::GraphView)
contract and returns results in terms of the caller's identifiers.

# Representation

Internally, every algorithm first builds a dense snapshot of the graph (see [`repr`]):
nodes are numbered `0..n` in the order in which [`GraphView::nodes`](ops::GraphView::nodes)
reports them, and adjacency is stored in compressed (CSR) buffers. We represent these
**nodes** as `u32`; for **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
Snapshots are rebuilt on every call, so no result ever depends on an outdated view.

### Directed vs Undirected

Both **directed** and **undirected** graphs are supported. Some algorithms only make sense
for one of them (strongly connected components and topological sort need a directed
graph, Prim's algorithm an undirected one) and reject the other with
[`AlgoError::InvalidArgument`](error::AlgoError::InvalidArgument). Degree-based
neighborhoods (k-cores, link prediction) use the undirected view of directed graphs.

# Design

All algorithms are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before calling the configured algorithm on a
provided graph. Alternatively, the most commonly used functionality is implemented via
the [`GraphAlgorithms`](algo::GraphAlgorithms) trait on every graph, making it usable
without configuring the algorithm beforehand.

A missing path or a disconnected graph is not an error: such outcomes are reported as
`Ok(None)`. Genuine failures (negative weights for Dijkstra, negative cycles, cycles in a
topological sort, invalid configuration) are reported as [`AlgoError`](error::AlgoError).

# Usage

There are *3* core submodules you probably want to interact with:
- [`ops`] defines the [`GraphView`](ops::GraphView) contract your graph has to implement,
- [`algo`] includes the algorithms: traversals, Dijkstra, A*, Bellman-Ford, Prim,
  degree centrality, PageRank, Tarjan's SCC, topological sort, k-core decomposition
  and link prediction,
- [`utils`] includes the result containers such as [`NodeScores`](utils::NodeScores).

Lower level, index-based access to the algorithms is possible through the iterators in
[`algo`] (e.g. [`StronglyConnectedComponents`](algo::StronglyConnectedComponents)) in
combination with the snapshots of [`repr`].

In most use-cases, `use lgraphs::prelude::*;` suffices for your needs.

# Logging

The crate emits [`tracing`] events (`debug` for outcomes, `trace` for per-iteration
progress, `warn` for inconsistent views) but never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `lgraphs::prelude` includes the graph contract, the error type and all algorithms.
pub mod prelude {
    pub use super::{
        algo::*,
        error::{AlgoError, Result},
        ops::*,
        utils::NodeScores,
    };
}
