use super::*;
use crate::helpers::models::{create_grid_instance, create_instance};

#[test]
fn can_build_minimum_spanning_tree() {
    let state = create_instance(&[(0., 0.), (10., 0.), (1., 0.), (11., 0.)]);

    let tree = SpanningTreeBuilder::new(4, 0).build(|a, b| state.distance(a, b), &mut |_, _| true).unwrap();

    assert_eq!(tree.root(), 0);
    assert_eq!(tree.weight(), 11.);
    assert_eq!(tree.parent(2), Some(0));
    assert_eq!(tree.parent(1), Some(2));
    assert_eq!(tree.parent(3), Some(1));
    assert_eq!(tree.leaves().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(tree.preorder(), vec![0, 2, 1, 3]);
}

#[test]
fn can_visit_children_in_attach_order() {
    let state = create_instance(&[(0., 0.), (3., 0.), (0., 1.), (0., -2.)]);

    let tree = SpanningTreeBuilder::new(4, 0).build(|a, b| state.distance(a, b), &mut |_, _| true).unwrap();

    assert_eq!(tree.first_child(0), Some(2));
    assert_eq!(tree.degree(0), 3);
    assert_eq!(tree.preorder(), vec![0, 2, 3, 1]);
}

#[test]
fn can_report_attached_nodes_and_stop() {
    let state = create_grid_instance(3, 3);
    let mut attached = Vec::new();

    let tree = SpanningTreeBuilder::new(9, 4).build(
        |a, b| state.distance(a, b),
        &mut |child, parent| {
            attached.push((child, parent));
            attached.len() < 3
        },
    );

    assert!(tree.is_none());
    assert_eq!(attached.len(), 3);
    assert!(attached.iter().all(|&(_, parent)| parent == 4 || attached.iter().any(|&(child, _)| child == parent)));
}

#[test]
fn can_build_tree_for_single_node() {
    let tree = SpanningTreeBuilder::new(1, 0).build(|_, _| 0., &mut |_, _| true).unwrap();

    assert_eq!(tree.preorder(), vec![0]);
    assert_eq!(tree.weight(), 0.);
}
