//! Property-based tests for composition.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::mounter::compose;
    use fastmango_core::{ConflictPolicy, RegistrationKind};
    use fastmango_registry::AppRegistry;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,7}"
    }

    /// App names with per-app key sets; apps unique, keys unique per app.
    fn app_specs() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
        prop::collection::hash_map(identifier(), prop::collection::hash_set(identifier(), 0..5), 0..6)
            .prop_map(|apps| {
                apps.into_iter()
                    .map(|(app, keys)| (app, keys.into_iter().collect()))
                    .collect()
            })
    }

    fn build(specs: &[(String, Vec<String>)]) -> Vec<AppRegistry> {
        specs
            .iter()
            .map(|(app, keys)| {
                let mut registry = AppRegistry::new(app.clone());
                for key in keys {
                    registry
                        .register(key.clone(), Arc::new(key.clone()), RegistrationKind::ModelAdmin)
                        .unwrap();
                }
                registry
            })
            .collect()
    }

    proptest! {
        /// Whenever strict composition succeeds, the flat index holds no
        /// two registrations sharing a qualified key, and no two apps
        /// share a bare key within a kind.
        #[test]
        fn strict_composite_has_unique_keys(specs in app_specs()) {
            if let Ok(composition) = compose(build(&specs), ConflictPolicy::Strict) {
                let flat: Vec<_> = composition.registry.flat_keys().collect();
                let unique: HashSet<_> = flat.iter().collect();
                prop_assert_eq!(flat.len(), unique.len());

                let bare: Vec<_> = composition
                    .registry
                    .list_all(Some(RegistrationKind::ModelAdmin), None)
                    .map(|r| r.key().to_string())
                    .collect();
                let unique_bare: HashSet<_> = bare.iter().collect();
                prop_assert_eq!(bare.len(), unique_bare.len());
                prop_assert!(composition.audit.is_empty());
            }
        }

        /// Composing the same registries twice yields structurally equal
        /// composites.
        #[test]
        fn compose_is_idempotent(specs in app_specs()) {
            let first = compose(build(&specs), ConflictPolicy::Strict);
            let second = compose(build(&specs), ConflictPolicy::Strict);
            match (first, second) {
                (Ok(a), Ok(b)) => {
                    let ka: Vec<_> = a.registry.flat_keys().collect();
                    let kb: Vec<_> = b.registry.flat_keys().collect();
                    prop_assert_eq!(ka, kb);
                }
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "compose not deterministic"),
            }
        }

        /// Non-strict policies never fail on key collisions, and every
        /// dropped or replaced entry appears in the audit log.
        #[test]
        fn non_strict_policies_account_for_every_collision(specs in app_specs()) {
            let total: usize = specs.iter().map(|(_, keys)| keys.len()).sum();
            for policy in [ConflictPolicy::OverrideLatest, ConflictPolicy::SkipDuplicate] {
                let composition = compose(build(&specs), policy).unwrap();
                prop_assert_eq!(
                    composition.registry.len() + composition.audit.len(),
                    total
                );
            }
        }

        /// Registrations of an earlier app precede those of a later app.
        #[test]
        fn list_all_preserves_app_order(specs in app_specs()) {
            if let Ok(composition) = compose(build(&specs), ConflictPolicy::Strict) {
                let app_order: Vec<_> = specs.iter().map(|(app, _)| app.clone()).collect();
                let positions: Vec<_> = composition
                    .registry
                    .list_all(None, None)
                    .map(|r| {
                        app_order
                            .iter()
                            .position(|a| a == r.source_app())
                            .unwrap()
                    })
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
