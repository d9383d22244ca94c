//! Weighted route graph and shortest-path search.
//!
//! The graph is a fixed set of named locations connected by undirected
//! weighted edges. It is built once at startup and never mutated afterwards;
//! there is deliberately no public API for adding edges to a constructed
//! graph.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed multiplier converting graph distance to currency units.
pub const PRICE_PER_UNIT: u32 = 100;

/// Computes the cost of a route from its shortest-path distance.
///
/// # Examples
///
/// ```
/// use resa::route_cost;
///
/// assert_eq!(route_cost(16), 1600);
/// ```
#[must_use]
pub const fn route_cost(distance: u32) -> u32 {
    distance * PRICE_PER_UNIT
}

/// Identifier of a location node in the route graph.
///
/// A `LocationId` is an index into the graph's node table. Whether the index
/// actually names a node of a particular graph is checked by the graph
/// operations, not by this type.
///
/// # Examples
///
/// ```
/// use resa::LocationId;
///
/// let delhi = LocationId::new(0);
/// assert_eq!(delhi.index(), 0);
/// assert_eq!(format!("{delhi}"), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(usize);

impl LocationId {
    /// Creates a location identifier from a node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFound {
    /// Total weight of the minimum-weight path.
    pub distance: u32,

    /// The nodes along the path, source first, destination last.
    pub nodes: Vec<LocationId>,
}

/// A fixed weighted undirected graph over named locations.
///
/// # Examples
///
/// ```
/// use resa::{LocationId, RouteGraph};
///
/// let graph = RouteGraph::demo();
/// let found = graph
///     .shortest_path(LocationId::new(0), LocationId::new(5))
///     .unwrap();
/// assert_eq!(found.distance, 16);
/// ```
#[derive(Debug, Clone)]
pub struct RouteGraph {
    names: Vec<String>,
    adj: Vec<Vec<(usize, u32)>>,
}

impl RouteGraph {
    /// Creates a graph from location names and undirected weighted edges.
    ///
    /// Each edge `(u, v, w)` connects nodes `u` and `v` in both directions
    /// with weight `w`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if an edge endpoint is not a valid
    /// node index.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::RouteGraph;
    ///
    /// let graph = RouteGraph::new(
    ///     vec!["A".to_string(), "B".to_string()],
    ///     &[(0, 1, 4)],
    /// )
    /// .unwrap();
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    pub fn new(names: Vec<String>, edges: &[(usize, usize, u32)]) -> Result<Self> {
        let count = names.len();
        for &(u, v, _) in edges {
            for endpoint in [u, v] {
                if endpoint >= count {
                    return Err(Error::UnknownLocation {
                        index: endpoint,
                        count,
                    });
                }
            }
        }

        let mut graph = Self {
            names,
            adj: vec![Vec::new(); count],
        };
        for &(u, v, w) in edges {
            graph.add_undirected_edge(u, v, w);
        }
        Ok(graph)
    }

    /// Builds the fixed demonstration graph of six locations.
    ///
    /// Nodes: Delhi(0), Mumbai(1), Chennai(2), Kolkata(3), Goa(4),
    /// Bangalore(5).
    #[must_use]
    pub fn demo() -> Self {
        let names = ["Delhi", "Mumbai", "Chennai", "Kolkata", "Goa", "Bangalore"]
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let mut graph = Self {
            adj: vec![Vec::new(); names.len()],
            names,
        };
        for (u, v, w) in [
            (0, 1, 5),
            (0, 2, 8),
            (1, 2, 3),
            (1, 3, 7),
            (2, 4, 6),
            (4, 5, 2),
            (3, 5, 10),
        ] {
            graph.add_undirected_edge(u, v, w);
        }
        graph
    }

    fn add_undirected_edge(&mut self, u: usize, v: usize, weight: u32) {
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
    }

    /// Returns the number of location nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the identifier names a node of this graph.
    #[must_use]
    pub fn contains(&self, location: LocationId) -> bool {
        location.index() < self.names.len()
    }

    /// Returns the display name of a location, if it exists.
    #[must_use]
    pub fn name(&self, location: LocationId) -> Option<&str> {
        self.names.get(location.index()).map(String::as_str)
    }

    /// Looks a location up by name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::{LocationId, RouteGraph};
    ///
    /// let graph = RouteGraph::demo();
    /// assert_eq!(graph.location_by_name("goa"), Some(LocationId::new(4)));
    /// assert_eq!(graph.location_by_name("Atlantis"), None);
    /// ```
    #[must_use]
    pub fn location_by_name(&self, name: &str) -> Option<LocationId> {
        self.names
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(LocationId::new)
    }

    /// Iterates over all locations with their display names.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (LocationId::new(index), name.as_str()))
    }

    /// Display name of a location, or `"N/A"` for an index this graph does
    /// not know (such as a route read back from a hand-edited state file).
    #[must_use]
    pub fn name_or_na(&self, location: LocationId) -> &str {
        self.name(location).unwrap_or("N/A")
    }

    fn check_node(&self, location: LocationId) -> Result<usize> {
        if self.contains(location) {
            Ok(location.index())
        } else {
            Err(Error::UnknownLocation {
                index: location.index(),
                count: self.names.len(),
            })
        }
    }

    /// Computes the minimum-weight path between two locations.
    ///
    /// This is a label-setting search: every node carries a tentative
    /// distance, the unvisited node with the smallest tentative distance is
    /// settled next (linear scan; the graph is small), and its neighbors are
    /// relaxed. Ties keep the first-found predecessor, so the returned path
    /// is deterministic for a given edge ordering. The search stops as soon
    /// as the destination is settled.
    ///
    /// A query from a node to itself returns distance 0 and a single-node
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if either endpoint is out of
    /// range, or [`Error::RouteUnreachable`] if no path connects the two
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::{LocationId, RouteGraph};
    ///
    /// let graph = RouteGraph::demo();
    /// let found = graph
    ///     .shortest_path(LocationId::new(0), LocationId::new(5))
    ///     .unwrap();
    /// assert_eq!(found.distance, 16);
    /// assert_eq!(found.nodes.first(), Some(&LocationId::new(0)));
    /// assert_eq!(found.nodes.last(), Some(&LocationId::new(5)));
    /// ```
    pub fn shortest_path(&self, src: LocationId, dst: LocationId) -> Result<PathFound> {
        let src_index = self.check_node(src)?;
        let dst_index = self.check_node(dst)?;

        let node_count = self.names.len();
        let mut dist: Vec<Option<u32>> = vec![None; node_count];
        let mut prev: Vec<Option<usize>> = vec![None; node_count];
        let mut visited = vec![false; node_count];
        dist[src_index] = Some(0);

        for _ in 0..node_count {
            let next = (0..node_count)
                .filter(|&node| !visited[node])
                .filter_map(|node| dist[node].map(|d| (node, d)))
                .min_by_key(|&(_, d)| d);
            let Some((u, du)) = next else { break };

            visited[u] = true;
            if u == dst_index {
                break;
            }
            for &(v, weight) in &self.adj[u] {
                if visited[v] {
                    continue;
                }
                let candidate = du.saturating_add(weight);
                if dist[v].map_or(true, |dv| candidate < dv) {
                    dist[v] = Some(candidate);
                    prev[v] = Some(u);
                }
            }
        }

        let Some(distance) = dist[dst_index] else {
            return Err(Error::RouteUnreachable {
                from: self.name_or_na(src).to_string(),
                to: self.name_or_na(dst).to_string(),
            });
        };

        let mut nodes = Vec::new();
        let mut cursor = Some(dst_index);
        while let Some(node) = cursor {
            nodes.push(LocationId::new(node));
            cursor = prev[node];
        }
        nodes.reverse();

        Ok(PathFound { distance, nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(indices: &[usize]) -> Vec<LocationId> {
        indices.iter().copied().map(LocationId::new).collect()
    }

    #[test]
    fn test_demo_graph_shape() {
        let graph = RouteGraph::demo();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.name(LocationId::new(0)), Some("Delhi"));
        assert_eq!(graph.name(LocationId::new(5)), Some("Bangalore"));
        assert_eq!(graph.name(LocationId::new(6)), None);
    }

    #[test]
    fn test_location_by_name_case_insensitive() {
        let graph = RouteGraph::demo();
        assert_eq!(graph.location_by_name("Delhi"), Some(LocationId::new(0)));
        assert_eq!(graph.location_by_name("CHENNAI"), Some(LocationId::new(2)));
        assert_eq!(graph.location_by_name("nowhere"), None);
    }

    #[test]
    fn test_shortest_path_demo_fixture() {
        let graph = RouteGraph::demo();
        let found = graph
            .shortest_path(LocationId::new(0), LocationId::new(5))
            .unwrap();
        assert_eq!(found.distance, 16);
        // Two minimum-weight paths exist; either is acceptable.
        assert!(found.nodes == ids(&[0, 1, 2, 4, 5]) || found.nodes == ids(&[0, 2, 4, 5]));
        assert_eq!(route_cost(found.distance), 1600);
    }

    #[test]
    fn test_shortest_path_direct_edge() {
        let graph = RouteGraph::demo();
        let found = graph
            .shortest_path(LocationId::new(0), LocationId::new(1))
            .unwrap();
        assert_eq!(found.distance, 5);
        assert_eq!(found.nodes, ids(&[0, 1]));
    }

    #[test]
    fn test_shortest_path_prefers_cheaper_detour() {
        let graph = RouteGraph::demo();
        // Delhi -> Chennai directly costs 8; via Mumbai it also costs 8.
        let found = graph
            .shortest_path(LocationId::new(0), LocationId::new(2))
            .unwrap();
        assert_eq!(found.distance, 8);
    }

    #[test]
    fn test_shortest_path_symmetric_distance() {
        let graph = RouteGraph::demo();
        let forward = graph
            .shortest_path(LocationId::new(3), LocationId::new(4))
            .unwrap();
        let backward = graph
            .shortest_path(LocationId::new(4), LocationId::new(3))
            .unwrap();
        assert_eq!(forward.distance, backward.distance);
    }

    #[test]
    fn test_shortest_path_self_route() {
        let graph = RouteGraph::demo();
        let found = graph
            .shortest_path(LocationId::new(2), LocationId::new(2))
            .unwrap();
        assert_eq!(found.distance, 0);
        assert_eq!(found.nodes, ids(&[2]));
    }

    #[test]
    fn test_shortest_path_out_of_range() {
        let graph = RouteGraph::demo();
        let err = graph
            .shortest_path(LocationId::new(0), LocationId::new(6))
            .unwrap_err();
        assert!(err.is_unknown_location());
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = RouteGraph::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            &[(0, 1, 2)],
        )
        .unwrap();
        let err = graph
            .shortest_path(LocationId::new(0), LocationId::new(2))
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_new_rejects_bad_edge() {
        let err = RouteGraph::new(vec!["A".to_string()], &[(0, 3, 1)]).unwrap_err();
        assert!(err.is_unknown_location());
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let graph = RouteGraph::demo();
        let first = graph
            .shortest_path(LocationId::new(0), LocationId::new(5))
            .unwrap();
        let second = graph
            .shortest_path(LocationId::new(0), LocationId::new(5))
            .unwrap();
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_route_cost_multiplier() {
        assert_eq!(route_cost(0), 0);
        assert_eq!(route_cost(5), 500);
        assert_eq!(route_cost(16), 1600);
    }
}
