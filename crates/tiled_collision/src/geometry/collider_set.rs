//! Immutable collection of segment ranges for one collider layer

use std::sync::Arc;

use super::segment::SegmentRange;

/// Every segment range of one named layer, in load order
///
/// Built once per level load and never mutated. Cloning shares the underlying
/// storage, so several checkers can query the same level geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderSet {
    layer_name: Arc<str>,
    ranges: Arc<[SegmentRange]>,
}

impl ColliderSet {
    /// Wrap already computed ranges
    pub fn new(layer_name: &str, ranges: Vec<SegmentRange>) -> Self {
        Self {
            layer_name: Arc::from(layer_name),
            ranges: Arc::from(ranges),
        }
    }

    /// Name of the layer these ranges came from
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// All ranges in object order, then segment order
    pub fn ranges(&self) -> &[SegmentRange] {
        &self.ranges
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when the layer produced no segments
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the ranges
    pub fn iter(&self) -> std::slice::Iter<'_, SegmentRange> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a ColliderSet {
    type Item = &'a SegmentRange;
    type IntoIter = std::slice::Iter<'a, SegmentRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_collider_set_is_shareable() {
        assert_send_sync::<ColliderSet>();
    }

    #[test]
    fn test_clone_shares_storage() {
        let set = ColliderSet::new(
            "walls",
            vec![SegmentRange::from_points(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))],
        );
        let copy = set.clone();

        assert!(std::ptr::eq(set.ranges().as_ptr(), copy.ranges().as_ptr()));
        assert_eq!(copy.layer_name(), "walls");
        assert_eq!(copy.len(), 1);
        assert!(!copy.is_empty());
        assert_eq!((&copy).into_iter().count(), 1);
    }
}
