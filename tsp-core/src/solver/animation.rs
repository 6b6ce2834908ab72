/// A sink for events emitted by running heuristics, implemented by a presentation layer.
///
/// Edge and tour events are emitted only when animation is enabled, progress and status are
/// always reported. All methods do nothing by default.
pub trait AnimationPort: Send + Sync {
    /// An edge is committed to the tour.
    fn edge_added(&self, _from: usize, _to: usize) {}

    /// An edge is removed from the partial tour.
    fn edge_removed(&self, _from: usize, _to: usize) {}

    /// A preview edge is shown.
    fn provisional_edge_added(&self, _from: usize, _to: usize) {}

    /// Preview edges are enabled or disabled (and cleared).
    fn set_provisional_edges(&self, _enabled: bool) {}

    /// The tour was changed by a local search move.
    fn tour_changed(&self) {}

    /// Progress of the run in percents.
    fn progress(&self, _percent: u8) {}

    /// Human readable status of the run.
    fn status(&self, _text: &str) {}
}

/// An animation port which ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnimation;

impl AnimationPort for NoAnimation {}
