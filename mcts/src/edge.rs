/// Statistics of a single `(state, action)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MCTSEdge {
    visits: usize,
    value: f32,
}

impl MCTSEdge {
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn is_visited(&self) -> bool {
        self.visits > 0
    }

    /// Running mean of every value backed up through this edge. Zero while unvisited.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub(crate) fn record(&mut self, value: f32) {
        let visits = self.visits as f32;
        self.value = (visits * self.value + value) / (visits + 1.0);
        self.visits += 1;
    }
}
