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

use crate::adapter::adapted::AdaptedComponent;
use crate::adapter::component::Element;
use crate::adapter::component_cache::ComponentCache;
use crate::config::ReconcilerConfig;
use crate::error::{LoadError, ReconcileError};
use crate::observability::{events, fields};
use crate::ordering::order_entry::OrderEntry;
use crate::ordering::order_reconciler::{self, Reconciliation};
use crate::route_node::{RouteNode, RouteNodeRef};
use crate::screen::descriptor::{build_screens, ScreenDescriptor};
use std::sync::Arc;
use tracing::debug;

const COMPONENT: &str = "route_reconciler";

/// Owner of one route tree's adapter cache and reconciliation settings.
///
/// Adapted units are kept while their route node is alive; a discarded route tree
/// releases its units without a new reconciler.
#[derive(Clone)]
pub struct RouteReconciler {
    name: String,
    config: ReconcilerConfig,
    cache: Arc<ComponentCache>,
}

impl RouteReconciler {
    pub fn new(name: &str, config: ReconcilerConfig) -> Self {
        let cache = ComponentCache::new(&config);
        Self::with_cache(name, config, cache)
    }

    /// Same as [`RouteReconciler::new`] with a custom placeholder for pending modules.
    pub fn with_fallback<F>(name: &str, config: ReconcilerConfig, fallback: F) -> Self
    where
        F: Fn(&RouteNode) -> Element + Send + Sync + 'static,
    {
        let cache = ComponentCache::new(&config).with_fallback(fallback);
        Self::with_cache(name, config, cache)
    }

    fn with_cache(name: &str, config: ReconcilerConfig, cache: ComponentCache) -> Self {
        debug!(
            event = events::RECONCILER_CREATE,
            component = COMPONENT,
            reconciler = name,
            import_mode = ?config.import_mode,
            check_empty_default_export = config.check_empty_default_export,
            "route reconciler created"
        );

        Self {
            name: name.to_string(),
            config,
            cache: Arc::new(cache),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub fn reconcile_order(
        &self,
        children: &[RouteNodeRef],
        order: Option<&[OrderEntry]>,
        initial_route_name: Option<&str>,
    ) -> Result<Reconciliation, ReconcileError> {
        order_reconciler::reconcile_order(children, order, initial_route_name)
    }

    /// Orders `layout`'s children and builds their screen descriptors.
    pub fn screens(
        &self,
        layout: &RouteNode,
        order: Option<&[OrderEntry]>,
    ) -> Result<Vec<ScreenDescriptor>, ReconcileError> {
        let reconciliation = self.reconcile_order(
            &layout.children,
            order,
            layout.initial_route_name.as_deref(),
        )?;

        debug!(
            event = events::LAYOUT_RECONCILED,
            component = COMPONENT,
            reconciler = %self.name,
            layout = %fields::format_route_label(layout),
            initial_route = %fields::format_optional(layout.initial_route_name.as_deref()),
            screens = reconciliation.routes.len(),
            diagnostics = reconciliation.diagnostics.len(),
            "reconciled layout"
        );
        Ok(build_screens(&reconciliation.routes, &self.cache))
    }

    pub fn adapt(&self, route: &RouteNodeRef) -> Arc<AdaptedComponent> {
        self.cache.adapt(route)
    }

    /// Resolves `route`'s module ahead of its first render.
    pub async fn preload(&self, route: &RouteNodeRef) -> Result<(), LoadError> {
        self.cache.adapt(route).preload().await
    }

    /// Number of adapted units currently held.
    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }
}
