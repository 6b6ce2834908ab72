//! This module contains combinatorial building blocks used by the heuristics.

mod convex_hull;
pub use self::convex_hull::ConvexHullList;

mod disjoint_set;
pub use self::disjoint_set::DisjointSetForest;

mod spanning_tree;
pub use self::spanning_tree::{SpanningTree, SpanningTreeBuilder};
