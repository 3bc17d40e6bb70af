//! Property tests over generated location forests and users.

use std::collections::BTreeSet;

use locgate::core::{is_blank, parse_location_list, User, LOCATION_USER_PROPERTY_NAME};
use locgate::store::{LocationRegistry, MemoryDirectory};
use locgate::{FilterBinder, FilterConfig, FilterVerdict, ParameterBag, LOCATION_UUIDS_PARAMETER};
use locgate_testkit::generators::{filter_name, location_forest, scenario};
use locgate_testkit::descendants;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_bound_set_closed_under_descendancy(s in scenario(25)) {
        prop_assume!(!s.user.is_super_user());
        let binder = s.binder();
        let mut bag = ParameterBag::new("patient_location_based_filter");

        prop_assert_eq!(binder.on_filter_activation(&mut bag), FilterVerdict::Engage);
        let set = bag.parameter(LOCATION_UUIDS_PARAMETER).unwrap();

        for uuid in set.iter() {
            let location = binder.registry().get_by_uuid(uuid).unwrap();
            prop_assert!(location.is_some(), "{} does not resolve", uuid);
            for child in location.unwrap().children() {
                prop_assert!(set.contains(child.as_str()));
            }
        }
    }

    #[test]
    fn test_configured_list_matches_reference_closure(
        locations in location_forest(25),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let roots: Vec<String> = picks
            .iter()
            .map(|i| locations[i.index(locations.len())].uuid.to_string())
            .collect();
        let user = User::new("alice").with_property(LOCATION_USER_PROPERTY_NAME, roots.join(","));

        let expected: BTreeSet<String> = roots
            .iter()
            .flat_map(|root| descendants(&locations, root))
            .collect();

        let registry = locgate::store::MemoryRegistry::with_locations(locations).unwrap();
        let binder = FilterBinder::new(registry, MemoryDirectory::with_user(user.clone()));
        let set = binder.access_set_for(Some(&user));

        let actual: BTreeSet<String> = set.to_strings().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_super_user_never_bound(s in scenario(10), name in filter_name()) {
        let user = s.user.clone().super_user();
        let binder = FilterBinder::with_config(
            s.registry(),
            MemoryDirectory::with_user(user),
            &FilterConfig::default(),
        );
        let mut bag = ParameterBag::new(name);

        prop_assert_eq!(binder.on_filter_activation(&mut bag), FilterVerdict::Skip);
        prop_assert!(bag.is_untouched());
    }

    #[test]
    fn test_foreign_filters_untouched(s in scenario(10), name in "[a-z_]{0,30}") {
        prop_assume!(!name.starts_with("patient_location_based_filter"));
        prop_assume!(!s.user.is_super_user());
        let binder = s.binder();
        let mut bag = ParameterBag::new(name);

        prop_assert_eq!(binder.on_filter_activation(&mut bag), FilterVerdict::Engage);
        prop_assert!(bag.is_untouched());
    }

    #[test]
    fn test_unconfigured_user_sees_nothing(locations in location_forest(15), name in "[a-z]{3,8}") {
        let user = User::new(name);
        let registry = locgate::store::MemoryRegistry::with_locations(locations).unwrap();
        let binder = FilterBinder::new(registry, MemoryDirectory::with_user(user));
        let mut bag = ParameterBag::new("patient_location_based_filter");

        prop_assert_eq!(binder.on_filter_activation(&mut bag), FilterVerdict::Engage);
        prop_assert!(bag.parameter(LOCATION_UUIDS_PARAMETER).unwrap().is_empty());
    }

    #[test]
    fn test_configured_identifiers_bound_the_set(s in scenario(20)) {
        let raw = s.user.user_property(LOCATION_USER_PROPERTY_NAME).unwrap_or("");
        let roots = parse_location_list(raw);
        prop_assume!(!is_blank(raw) && !roots.is_empty());

        // A usable configured list is authoritative: session and privileges
        // never widen it.
        let expected: BTreeSet<String> = roots
            .iter()
            .flat_map(|root| descendants(&s.locations, root.as_str()))
            .collect();

        let binder = s.binder();
        let actual: BTreeSet<String> =
            binder.access_set_for(Some(&s.user)).to_strings().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_resolution_is_idempotent(s in scenario(20)) {
        let binder = s.binder();
        let first = binder.access_set_for(Some(&s.user));
        let second = binder.access_set_for(Some(&s.user));
        prop_assert_eq!(first, second);
    }
}
