/// Pseudo-random source.
pub trait RandomPort: Send + Sync {
    /// Next value, expected in `[0, 1)`.
    fn next_f64(&self) -> f64;
}

/// Draw helpers shared by every [`RandomPort`].
pub trait RandomPortExt: RandomPort {
    /// Next value forced into `[0, 1)`. Non-finite values map to `0.0`.
    fn unit_interval(&self) -> f64 {
        let value = self.next_f64();
        if value.is_finite() {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }

    /// `true` with the given probability.
    fn chance(&self, probability: f64) -> bool {
        self.unit_interval() < probability
    }

    /// Uniformly pick one item. `None` for an empty slice.
    fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.unit_interval() * items.len() as f64) as usize;
        items.get(index.min(items.len() - 1))
    }
}

impl<R: RandomPort + ?Sized> RandomPortExt for R {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomPort for Fixed {
        fn next_f64(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn chance_is_strictly_below_probability() {
        assert!(Fixed(0.29).chance(0.3));
        assert!(!Fixed(0.3).chance(0.3));
        assert!(!Fixed(0.0).chance(0.0));
        assert!(Fixed(0.999).chance(1.0));
    }

    #[test]
    fn pick_spreads_over_whole_slice() {
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(Fixed(0.0).pick(&items), Some(&"a"));
        assert_eq!(Fixed(0.45).pick(&items), Some(&"c"));
        assert_eq!(Fixed(0.99).pick(&items), Some(&"e"));
        assert_eq!(Fixed(0.5).pick::<&str>(&[]), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(Fixed(f64::NAN).unit_interval(), 0.0);
        assert!(Fixed(1.0).unit_interval() < 1.0);
        assert_eq!(Fixed(-3.0).unit_interval(), 0.0);
        let dynamic: &dyn RandomPort = &Fixed(0.25);
        assert_eq!(dynamic.unit_interval(), 0.25);
    }
}
