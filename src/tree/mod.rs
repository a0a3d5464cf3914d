//! Tree reconstruction and size aggregation

pub mod aggregate;
pub mod builder;
pub mod node;

pub use aggregate::aggregate_sizes;
pub use builder::{resolve_destination, BuildStats, BuiltTrees, Destination, TreeBuilder};
pub use node::{DocumentSlot, TreeNode};
