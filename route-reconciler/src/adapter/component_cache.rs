/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Identity-memoized registry of adapted route units.

use crate::adapter::adapted::{default_fallback, AdaptedComponent, FallbackFn};
use crate::adapter::component::Element;
use crate::adapter::lock_unpoisoned;
use crate::adapter::route_identity::RouteIdentityKey;
use crate::config::{ImportMode, ReconcilerConfig};
use crate::observability::{events, fields};
use crate::route_node::{RouteNode, RouteNodeRef};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const COMPONENT: &str = "component_cache";

type AdaptedUnits = HashMap<RouteIdentityKey, Arc<AdaptedComponent>>;

/// Adapted units keyed by route node identity.
///
/// Adapting the same [`RouteNodeRef`] twice hands back the same unit; structurally
/// identical but distinct nodes get independent units. Units only weakly reference
/// their route, so dropping a route tree releases its nodes, and the cache forgets
/// their units the next time it adds a unit or is measured.
pub struct ComponentCache {
    import_mode: ImportMode,
    check_empty_default_export: bool,
    fallback: FallbackFn,
    adapted: Mutex<AdaptedUnits>,
}

impl ComponentCache {
    pub fn new(config: &ReconcilerConfig) -> Self {
        Self {
            import_mode: config.import_mode,
            check_empty_default_export: config.check_empty_default_export,
            fallback: Arc::new(default_fallback),
            adapted: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the placeholder rendered while lazy modules are pending.
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&RouteNode) -> Element + Send + Sync + 'static,
    {
        self.fallback = Arc::new(fallback);
        self
    }

    pub fn import_mode(&self) -> ImportMode {
        self.import_mode
    }

    /// Returns the adapted unit for `route`, creating it on first use.
    ///
    /// In eager mode creation runs the route's loader. The cache lock is released while
    /// that happens, so a loader that adapts other routes does not deadlock; if the
    /// same route was adapted concurrently, the first stored unit wins.
    pub fn adapt(&self, route: &RouteNodeRef) -> Arc<AdaptedComponent> {
        let key = RouteIdentityKey::of(route);

        if let Some(existing) = lock_unpoisoned(&self.adapted)
            .get(&key)
            .filter(|unit| unit.adapts(route))
        {
            debug!(
                event = events::ADAPTER_CACHE_REUSE,
                component = COMPONENT,
                route = %fields::format_route_label(route),
                "reusing adapted route unit"
            );
            return existing.clone();
        }

        let created = Arc::new(match self.import_mode {
            ImportMode::Eager => AdaptedComponent::eager(
                route,
                self.check_empty_default_export,
                self.fallback.clone(),
            ),
            ImportMode::Lazy => AdaptedComponent::lazy(
                route,
                self.check_empty_default_export,
                self.fallback.clone(),
            ),
        });

        // Pruning first also clears a dead unit left under a reused address.
        let mut adapted = self.pruned();
        adapted
            .entry(key)
            .or_insert_with(|| {
                debug!(
                    event = events::ADAPTER_CACHE_CREATE,
                    component = COMPONENT,
                    route = %fields::format_route_label(route),
                    context_key = %route.context_key,
                    import_mode = ?self.import_mode,
                    "adapted route unit"
                );
                created
            })
            .clone()
    }

    pub fn contains(&self, route: &RouteNodeRef) -> bool {
        lock_unpoisoned(&self.adapted)
            .get(&RouteIdentityKey::of(route))
            .is_some_and(|unit| unit.adapts(route))
    }

    /// Number of units whose route is still alive.
    pub fn len(&self) -> usize {
        self.pruned().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pruned(&self) -> MutexGuard<'_, AdaptedUnits> {
        let mut adapted = lock_unpoisoned(&self.adapted);
        let before = adapted.len();
        adapted.retain(|_, unit| !unit.is_discarded());

        let released = before - adapted.len();
        if released > 0 {
            debug!(
                event = events::ADAPTER_CACHE_RELEASE,
                component = COMPONENT,
                released,
                remaining = adapted.len(),
                "released units of discarded routes"
            );
        }
        adapted
    }
}
