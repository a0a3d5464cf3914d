//! Size Aggregator: bottom-up `total_size` computation.

use crate::tree::node::TreeNode;

/// Recompute `total_size` for `node` and everything below it.
///
/// Each directory is fully aggregated before its parent sums it; the result
/// does not depend on any previous aggregation.
pub fn aggregate_sizes(node: &mut TreeNode) -> u64 {
    let documents: u64 = node
        .documents
        .values()
        .map(|record| record.document_size())
        .sum();
    let directories: u64 = node.directories.values_mut().map(aggregate_sizes).sum();
    node.total_size = documents + directories;
    node.total_size
}
