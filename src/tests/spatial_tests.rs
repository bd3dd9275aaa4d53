#[cfg(test)]
mod tests {
    use crate::errors::DeedTraceError;
    use crate::implementations::property_store::PropertyStore;
    use crate::implementations::spatial::SpatialResolver;
    use crate::models::common::GeoPoint;
    use crate::tests::fixtures::{ embedded_store, record };

    #[test]
    fn test_exact_coordinate_resolves() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.0001).unwrap();

        let hit = resolver.resolve(&GeoPoint::new(37.8654, -122.2588)).unwrap();
        assert_eq!(hit.id.as_str(), "101");
    }

    #[test]
    fn test_point_matching_nothing_is_not_found() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.0001).unwrap();

        let result = resolver.resolve(&GeoPoint::new(37.8, -122.3));
        assert!(matches!(result, Err(DeedTraceError::NotFound(_))));
        assert!(resolver.candidates(&GeoPoint::new(37.8, -122.3)).is_empty());
    }

    #[test]
    fn test_ambiguous_point_takes_first_in_store_order() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.001).unwrap();
        let point = GeoPoint::new(37.8656, -122.2585);

        let candidates: Vec<&str> = resolver
            .candidates(&point)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(candidates, vec!["101", "102", "103", "301", "302"]);
        assert_eq!(resolver.resolve(&point).unwrap().id.as_str(), "101");
    }

    #[test]
    fn test_tie_break_follows_store_order_not_distance() {
        // Second record is the exact hit, but the first is still inside the window
        let store = PropertyStore::from_records(
            "test",
            vec![
                record("near", "Near", "Owner", None, None, 1.0, 1.0),
                record("exact", "Exact", "Owner", None, None, 1.25, 1.0)
            ]
        ).unwrap();
        let resolver = SpatialResolver::new(&store, 0.5).unwrap();

        assert_eq!(resolver.resolve(&GeoPoint::new(1.25, 1.0)).unwrap().id.as_str(), "near");
    }

    #[test]
    fn test_tolerance_bound_is_inclusive() {
        let store = PropertyStore::from_records(
            "test",
            vec![record("a", "A", "Owner", None, None, 1.0, 1.0)]
        ).unwrap();
        let resolver = SpatialResolver::new(&store, 0.5).unwrap();

        assert!(resolver.resolve(&GeoPoint::new(1.5, 1.5)).is_ok());
        assert!(resolver.resolve(&GeoPoint::new(1.5, 1.75)).is_err());
    }

    #[test]
    fn test_one_decimal_step_away_is_inside_tolerance() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.0001).unwrap();

        // Record 101 sits at (37.8654, -122.2588)
        let hit = resolver.resolve(&GeoPoint::new(37.8654, -122.2589)).unwrap();
        assert_eq!(hit.id.as_str(), "101");
        assert!(resolver.resolve(&GeoPoint::new(37.8654, -122.2590)).is_err());
    }

    #[test]
    fn test_within_absorbs_decimal_rounding() {
        let stored = GeoPoint::new(37.8654, -122.2588);
        assert!(stored.within(&GeoPoint::new(37.8655, -122.2589), 0.0001));
        assert!(stored.within(&GeoPoint::new(37.8653, -122.2587), 0.0001));
        assert!(!stored.within(&GeoPoint::new(37.8656, -122.2588), 0.0001));
        assert!(!stored.within(&GeoPoint::new(37.86540001, -122.2588), 0.0));
    }

    #[test]
    fn test_zero_tolerance_requires_exact_match() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.0).unwrap();

        assert!(resolver.resolve(&GeoPoint::new(37.8375, -122.2625)).is_ok());
        assert!(resolver.resolve(&GeoPoint::new(37.8376, -122.2625)).is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let store = embedded_store();
        let resolver = SpatialResolver::new(&store, 0.0001).unwrap();
        let point = GeoPoint::new(37.8564, -122.2598);

        let first = resolver.resolve(&point).unwrap();
        let second = resolver.resolve(&point).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.id.as_str(), "401");
    }

    #[test]
    fn test_invalid_tolerance_is_rejected() {
        let store = embedded_store();
        for bad in [-0.0001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    SpatialResolver::new(&store, bad),
                    Err(DeedTraceError::InvalidConfiguration(_))
                ),
                "tolerance {} should be rejected",
                bad
            );
        }
    }
}
