/*!
# Edge Weights

Every graph is generic over its edge-weight type `W: Weight`. A weight maps to a [`Cost`], the
numeric type in which path lengths, spanning-tree costs and flows are accumulated.

- Unweighted graphs use [`Unit`]: every edge costs `1` (as `u64`), hence shortest paths count hops.
- All primitive integer and floating point types are weights whose cost is the value itself.
  Negative values are allowed; algorithms that cannot handle them report an error instead.
*/

use std::{
    fmt::{Debug, Display},
    ops::Sub,
};

use num::Zero;

/// Numeric type in which weights are accumulated.
///
/// Only a partial order is required so that floating point costs can be used.
/// Incomparable values (i.e. `NaN`) are treated as equal by the priority queues.
pub trait Cost: Copy + Debug + Display + PartialOrd + Zero + Sub<Output = Self> {
    /// Returns *true* if the cost is strictly smaller than zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns the smaller of both costs (the first one if incomparable)
    fn min_cost(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl<C> Cost for C where C: Copy + Debug + Display + PartialOrd + Zero + Sub<Output = C> {}

/// Weight attached to an edge
pub trait Weight: Copy + Debug + PartialEq {
    /// Type in which weights are summed up
    type Cost: Cost;

    /// The cost of traversing an edge with this weight
    fn cost(&self) -> Self::Cost;

    /// Annotation used when writing the edge in a textual format.
    /// `None` if the weight carries no information.
    fn label(&self) -> Option<String>;
}

/// The weight of unweighted graphs: each edge costs exactly one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Weight for Unit {
    type Cost = u64;

    #[inline]
    fn cost(&self) -> u64 {
        1
    }

    fn label(&self) -> Option<String> {
        None
    }
}

macro_rules! impl_numeric_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                type Cost = $t;

                #[inline]
                fn cost(&self) -> $t {
                    *self
                }

                fn label(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_numeric_weight!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Distance from a source as computed by [`BellmanFord`](crate::algo::BellmanFord).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance<C> {
    /// Shortest distance is well-defined
    Finite(C),
    /// Node is not reachable from the source (positive infinity)
    Unreachable,
    /// Node can be reached through a negative cycle, so paths are arbitrarily short
    NegativeInfinity,
}

impl<C: Copy> Distance<C> {
    /// Returns the distance if it is finite
    pub fn finite(&self) -> Option<C> {
        match self {
            Distance::Finite(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns *true* if the source reaches the node (possibly via a negative cycle)
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Distance::Unreachable)
    }
}

impl<C: Display> Display for Distance<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(c) => write!(f, "{c}"),
            Distance::Unreachable => write!(f, "inf"),
            Distance::NegativeInfinity => write!(f, "-inf"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_costs_one() {
        assert_eq!(Unit.cost(), 1);
        assert_eq!(Unit.label(), None);
    }

    #[test]
    fn numeric_costs() {
        assert_eq!((-4i64).cost(), -4);
        assert!((-4i64).cost().is_negative());
        assert!(!0.0f64.is_negative());
        assert_eq!(2.5f64.label().as_deref(), Some("2.5"));
        assert_eq!(3u32.min_cost(2), 2);
    }

    #[test]
    fn distance_helpers() {
        assert_eq!(Distance::Finite(3).finite(), Some(3));
        assert_eq!(Distance::<i32>::Unreachable.finite(), None);
        assert!(Distance::<i32>::NegativeInfinity.is_reachable());
        assert!(!Distance::<i32>::Unreachable.is_reachable());
        assert_eq!(Distance::<i32>::NegativeInfinity.to_string(), "-inf");
    }
}
