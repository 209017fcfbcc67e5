use itertools::Itertools;

use super::*;

/// Undirected neighbor sets of an [`AlgorithmGraph`].
///
/// For directed graphs the neighbors of `u` are the union of its successors and
/// predecessors, for undirected graphs its plain adjacency. Every set is sorted,
/// free of duplicates and never contains `u` itself, so parallel edges and
/// self-loops do not contribute to [`AdjacencyList::degree_of`].
#[derive(Debug, Clone)]
pub struct Neighborhoods {
    nbs: SlicedBuffer<Node>,
}

impl Neighborhoods {
    /// Builds the neighbor sets in `O(n + m log m)`
    pub fn undirected<I>(graph: &AlgorithmGraph<I>) -> Self
    where
        I: Clone + Eq + Hash,
    {
        let transposed;
        let in_nbs = match graph.in_buffer() {
            _ if !graph.is_directed() => None,
            Some(in_nbs) => Some(in_nbs),
            None => {
                transposed = graph.out_buffer().transposed();
                Some(&transposed)
            }
        };

        let mut buffer = Vec::with_capacity(graph.out_buffer().number_of_entries() * 2);
        let mut offsets = Vec::with_capacity(graph.len() + 1);
        offsets.push(0);

        for u in graph.vertices() {
            let incoming = in_nbs.map_or(&[][..], |in_nbs| &in_nbs[u]);
            buffer.extend(
                graph
                    .neighbors_of(u)
                    .iter()
                    .chain(incoming)
                    .copied()
                    .filter(|&v| v != u)
                    .sorted_unstable()
                    .dedup(),
            );
            offsets.push(buffer.len());
        }

        Self {
            nbs: SlicedBuffer::new(buffer, offsets),
        }
    }

    /// Returns *true* if `u` and `v` are neighbors
    pub fn has_neighbor(&self, u: Node, v: Node) -> bool {
        self.nbs[u].binary_search(&v).is_ok()
    }

    /// Returns the common neighbors of `u` and `v` in increasing order
    pub fn common_neighbors(&self, u: Node, v: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u]
            .iter()
            .merge_join_by(self.nbs[v].iter(), |a, b| a.cmp(b))
            .filter_map(|either| match either {
                itertools::EitherOrBoth::Both(&w, _) => Some(w),
                _ => None,
            })
    }
}

impl AdjacencyList for Neighborhoods {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.nbs[u]
    }
}
