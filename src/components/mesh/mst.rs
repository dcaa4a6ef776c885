use super::types::Node;

/// Minimum spanning tree over the node set: Prim's algorithm with squared
/// Euclidean distance as the edge weight, grown from node 0. Returns
/// `(node, parent)` pairs in the order nodes join the tree; ties resolve
/// to the lowest index because the scan is a strict `<` in index order.
///
/// The backbone exists so the rendered graph always reads as one
/// connected whole, however the proximity pass falls out.
pub fn mst_edges(nodes: &[Node]) -> Vec<(usize, usize)> {
	let n = nodes.len();
	if n <= 1 {
		return Vec::new();
	}

	let mut in_tree = vec![false; n];
	in_tree[0] = true;
	let mut parent = vec![0usize; n];
	let mut dist = vec![f64::INFINITY; n];
	for i in 1..n {
		dist[i] = dist_sq(&nodes[i], &nodes[0]);
	}

	let mut edges = Vec::with_capacity(n - 1);
	for _ in 1..n {
		let mut best = None;
		let mut best_dist = f64::INFINITY;
		for (i, &d) in dist.iter().enumerate() {
			if !in_tree[i] && d < best_dist {
				best_dist = d;
				best = Some(i);
			}
		}
		let Some(best) = best else {
			break;
		};
		in_tree[best] = true;
		edges.push((best, parent[best]));
		for j in 0..n {
			if !in_tree[j] {
				let d2 = dist_sq(&nodes[j], &nodes[best]);
				if d2 < dist[j] {
					dist[j] = d2;
					parent[j] = best;
				}
			}
		}
	}
	edges
}

fn dist_sq(a: &Node, b: &Node) -> f64 {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	dx * dx + dy * dy
}
