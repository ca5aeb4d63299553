use std::sync::atomic::{AtomicUsize, Ordering};

use sf_core::ports::RandomPort;

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty script always yields `0.0`.
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomPort for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        if self.values.is_empty() {
            return 0.0;
        }
        self.values[index % self.values.len()]
    }
}
