use super::*;

#[test]
fn can_merge_sets() {
    let mut forest = DisjointSetForest::new(4);

    assert!(forest.merge(0, 1));
    assert!(forest.merge(2, 3));
    assert!(!forest.merge(1, 0));
    assert!(forest.merge(1, 3));

    assert_eq!(forest.find(0), forest.find(2));
    assert!(!forest.merge(0, 3));
}

#[test]
fn can_attach_smaller_tree_under_larger() {
    let mut forest = DisjointSetForest::new(3);

    forest.merge(0, 1);
    let root = forest.find(0);
    forest.merge(2, 0);

    assert_eq!(forest.find(2), root);
}

#[test]
fn can_track_degree() {
    let mut forest = DisjointSetForest::new(3);

    forest.link(0, 1);
    forest.link(1, 2);

    assert_eq!(forest.degree(0), 1);
    assert_eq!(forest.degree(1), 2);
    assert_eq!(forest.degree(2), 1);
}

#[test]
fn can_walk_cycle() {
    let mut forest = DisjointSetForest::new(5);
    [(0, 3), (3, 1), (4, 2), (1, 4), (2, 0)].into_iter().for_each(|(a, b)| forest.link(a, b));

    let path = forest.walk(0);

    assert_eq!(path, vec![0, 3, 1, 4, 2]);
}

#[test]
fn can_walk_path() {
    let mut forest = DisjointSetForest::new(3);
    forest.link(1, 0);
    forest.link(0, 2);

    assert_eq!(forest.walk(1), vec![1, 0, 2]);
}
