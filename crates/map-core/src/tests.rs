//! Unit tests for map-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert!(!NodeId::default().is_valid());
        assert!(EdgeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, Point};

    #[test]
    fn distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn distance_does_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert!(a.distance(b).is_finite());
    }

    #[test]
    fn bbox_of_points() {
        let bbox = BoundingBox::from_points([
            Point::new(4, -2),
            Point::new(-1, 7),
            Point::new(10, 3),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point::new(-1, -2));
        assert_eq!(bbox.max, Point::new(10, 7));
        assert_eq!(bbox.width(), 11);
        assert_eq!(bbox.height(), 9);
        assert!(bbox.contains(Point::new(0, 0)));
        assert!(!bbox.contains(Point::new(11, 0)));
    }

    #[test]
    fn bbox_empty_is_none() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn bbox_center_truncates() {
        let bbox = BoundingBox { min: Point::new(0, 0), max: Point::new(5, 9) };
        assert_eq!(bbox.center(), Point::new(2, 4));

        let neg = BoundingBox { min: Point::new(-5, -9), max: Point::new(0, 0) };
        assert_eq!(neg.center(), Point::new(-2, -4));
    }

    #[test]
    fn bbox_extreme_span() {
        let bbox = BoundingBox { min: Point::new(i32::MIN, 0), max: Point::new(i32::MAX, 0) };
        assert_eq!(bbox.width(), u32::MAX as i64);
        assert!(bbox.is_degenerate());
        assert_eq!(bbox.center(), Point::new(0, 0));
    }
}

#[cfg(test)]
mod config {
    use crate::{MapConfig, MapError};

    #[test]
    fn default_is_valid() {
        let cfg = MapConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.margin, 50);
        assert_eq!(cfg.snap_radius, 50.0);
    }

    #[test]
    fn margin_too_large() {
        let cfg = MapConfig { width: 100, height: 400, margin: 50, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(MapError::Config(_))));
    }

    #[test]
    fn empty_area_rejected() {
        let cfg = MapConfig { width: 0, ..MapConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_snap_radius_rejected() {
        let cfg = MapConfig { snap_radius: f64::NAN, ..MapConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = MapConfig { snap_radius: -1.0, ..MapConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn turns_wrap() {
        let cfg = MapConfig { quarter_turns: 6, ..MapConfig::default() };
        assert_eq!(cfg.effective_turns(), 2);
    }
}
