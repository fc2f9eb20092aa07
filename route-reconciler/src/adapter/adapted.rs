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

//! Adapted route units: module resolution, prop forwarding and route scoping.

use crate::adapter::component::{Component, Element, Props, RenderContext};
use crate::adapter::lock_unpoisoned;
use crate::adapter::module_exports::ModuleLoad;
use crate::adapter::normalize::{from_import, NormalizedModule};
use crate::error::{LoadError, RenderError};
use crate::observability::{events, fields};
use crate::route_node::{RouteNode, RouteNodeRef};
use crate::screen::options::OptionsSource;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use serde_json::Value;
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, warn};

const COMPONENT: &str = "adapted_component";

/// Props injected by the navigation runtime that routes never see.
pub const STRIPPED_PROPS: [&str; 2] = ["route", "navigation"];
pub const SEGMENT_PROP: &str = "segment";

/// Renders the placeholder shown while a route's module is pending.
pub type FallbackFn = Arc<dyn Fn(&RouteNode) -> Element + Send + Sync>;

pub fn default_fallback(route: &RouteNode) -> Element {
    Element::Loading {
        context_key: route.context_key.clone(),
    }
}

type ModuleResolution = Result<NormalizedModule, LoadError>;
type SharedResolution = Shared<BoxFuture<'static, ModuleResolution>>;

enum Resolution {
    Eager(ModuleResolution),
    Lazy(Mutex<LazyState>),
}

#[derive(Clone)]
enum LazyState {
    Unstarted,
    Pending(SharedResolution),
    Settled(ModuleResolution),
}

/// A route wrapped for rendering by the host runtime.
///
/// Produced and memoized by [`ComponentCache`](crate::ComponentCache). Rendering strips
/// the navigation-injected `route` and `navigation` props, injects `segment`, and scopes
/// the output to the route so descendants find it through
/// [`RenderContext::route_node`].
///
/// The unit only holds a weak reference to its route, so it never keeps a discarded
/// route tree alive. Once the tree is dropped, loading and rendering report
/// [`LoadError::RouteDiscarded`].
///
/// Resolution is not serialized across threads: two threads that reach an unresolved
/// unit at the same time may both run the route's loader. The first result stored is
/// kept and the other is dropped.
pub struct AdaptedComponent {
    route: Weak<RouteNode>,
    context_key: String,
    check_empty_default_export: bool,
    fallback: FallbackFn,
    resolution: Resolution,
}

impl AdaptedComponent {
    /// Loads and normalizes the module immediately.
    pub(crate) fn eager(
        route: &RouteNodeRef,
        check_empty_default_export: bool,
        fallback: FallbackFn,
    ) -> Self {
        let resolution = match route.load_route() {
            ModuleLoad::Ready(exports) => Ok(from_import(exports, check_empty_default_export)),
            ModuleLoad::Pending(_) => Err(LoadError::PendingInEagerMode),
            ModuleLoad::Failed(err) => Err(err),
        };
        log_settled(&route.context_key, &resolution);

        Self {
            route: Arc::downgrade(route),
            context_key: route.context_key.clone(),
            check_empty_default_export,
            fallback,
            resolution: Resolution::Eager(resolution),
        }
    }

    /// Defers loading to the first render or preload.
    pub(crate) fn lazy(
        route: &RouteNodeRef,
        check_empty_default_export: bool,
        fallback: FallbackFn,
    ) -> Self {
        Self {
            route: Arc::downgrade(route),
            context_key: route.context_key.clone(),
            check_empty_default_export,
            fallback,
            resolution: Resolution::Lazy(Mutex::new(LazyState::Unstarted)),
        }
    }

    /// The adapted route, while its route tree is alive.
    pub fn route(&self) -> Option<RouteNodeRef> {
        self.route.upgrade()
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    /// Whether `route` is the live node this unit was adapted from.
    pub(crate) fn adapts(&self, route: &RouteNodeRef) -> bool {
        self.route
            .upgrade()
            .is_some_and(|live| Arc::ptr_eq(&live, route))
    }

    pub(crate) fn is_discarded(&self) -> bool {
        self.route.strong_count() == 0
    }

    pub fn is_resolved(&self) -> bool {
        match &self.resolution {
            Resolution::Eager(_) => true,
            Resolution::Lazy(state) => {
                matches!(*lock_unpoisoned(state), LazyState::Settled(_))
            }
        }
    }

    /// Statically declared navigation options of the module.
    ///
    /// Starts loading a lazy module if needed; `None` while it is still pending, when
    /// it failed, or when it declares no options.
    pub fn screen_options(&self) -> Option<OptionsSource> {
        match self.resolve()? {
            Ok(module) => module.screen_options,
            Err(_) => None,
        }
    }

    /// Drives the module to resolution without rendering it.
    pub async fn preload(&self) -> Result<(), LoadError> {
        let pending = match &self.resolution {
            Resolution::Eager(resolution) => {
                return resolution.as_ref().map(|_| ()).map_err(LoadError::clone)
            }
            Resolution::Lazy(state) => match self.start_lazy(state) {
                LazyState::Settled(resolution) => return resolution.map(|_| ()),
                LazyState::Pending(pending) => pending,
                LazyState::Unstarted => return Ok(()),
            },
        };

        let resolution = pending.await;
        if let Resolution::Lazy(state) = &self.resolution {
            self.settle(state, resolution.clone());
        }
        resolution.map(|_| ())
    }

    /// Renders the route's module, or the fallback while the module is pending.
    ///
    /// Load failures surface as [`RenderError::Load`] for the host's error handling.
    pub fn render(&self, props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
        let route = self.live_route()?;
        let scoped_context = context.with_route(route.clone());

        let child = match self.resolve() {
            None => (self.fallback)(&route),
            Some(Err(err)) => return Err(RenderError::Load(err)),
            Some(Ok(module)) => module
                .component
                .render(&forwarded_props(props, &route), &scoped_context)?,
        };

        Ok(Element::RouteScope {
            context_key: self.context_key.clone(),
            child: Box::new(child),
        })
    }

    fn live_route(&self) -> Result<RouteNodeRef, LoadError> {
        self.route
            .upgrade()
            .ok_or_else(|| LoadError::RouteDiscarded(self.context_key.clone()))
    }

    fn resolve(&self) -> Option<ModuleResolution> {
        let state = match &self.resolution {
            Resolution::Eager(resolution) => return Some(resolution.clone()),
            Resolution::Lazy(state) => state,
        };

        let pending = match self.start_lazy(state) {
            LazyState::Settled(resolution) => return Some(resolution),
            LazyState::Pending(pending) => pending,
            LazyState::Unstarted => return None,
        };

        let resolution = pending.now_or_never()?;
        self.settle(state, resolution.clone());
        Some(resolution)
    }

    // The loader runs without the state lock held; if another caller started the load
    // first, its state wins and this load is discarded.
    fn start_lazy(&self, state: &Mutex<LazyState>) -> LazyState {
        let current = lock_unpoisoned(state).clone();
        if !matches!(current, LazyState::Unstarted) {
            return current;
        }

        // Left unstored: a discarded route has nothing left to load.
        let route = match self.live_route() {
            Ok(route) => route,
            Err(err) => return LazyState::Settled(Err(err)),
        };

        let started = match route.load_route() {
            ModuleLoad::Ready(exports) => {
                let resolution = Ok(from_import(exports, self.check_empty_default_export));
                log_settled(&self.context_key, &resolution);
                LazyState::Settled(resolution)
            }
            ModuleLoad::Failed(err) => {
                let resolution = Err(err);
                log_settled(&self.context_key, &resolution);
                LazyState::Settled(resolution)
            }
            ModuleLoad::Pending(pending) => {
                debug!(
                    event = events::MODULE_LOAD_PENDING,
                    component = COMPONENT,
                    route = %fields::format_route_label(&route),
                    "route module is resolving asynchronously"
                );
                let check_empty_default_export = self.check_empty_default_export;
                LazyState::Pending(
                    pending
                        .map(move |loaded| {
                            loaded.map(|exports| from_import(exports, check_empty_default_export))
                        })
                        .boxed()
                        .shared(),
                )
            }
        };

        let mut guard = lock_unpoisoned(state);
        if matches!(*guard, LazyState::Unstarted) {
            *guard = started;
        }
        guard.clone()
    }

    fn settle(&self, state: &Mutex<LazyState>, resolution: ModuleResolution) {
        let mut guard = lock_unpoisoned(state);
        if matches!(*guard, LazyState::Pending(_)) {
            log_settled(&self.context_key, &resolution);
            *guard = LazyState::Settled(resolution);
        }
    }
}

impl Component for AdaptedComponent {
    fn render(&self, props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
        AdaptedComponent::render(self, props, context)
    }
}

fn forwarded_props(props: &Props, route: &RouteNode) -> Props {
    let mut forwarded = props.clone();
    for stripped in STRIPPED_PROPS {
        forwarded.remove(stripped);
    }
    forwarded.insert(SEGMENT_PROP.to_string(), Value::String(route.name.clone()));
    forwarded
}

fn log_settled(context_key: &str, resolution: &ModuleResolution) {
    match resolution {
        Ok(_) => debug!(
            event = events::MODULE_LOAD_RESOLVED,
            component = COMPONENT,
            context_key,
            "route module resolved"
        ),
        Err(err) => warn!(
            event = events::MODULE_LOAD_FAILED,
            component = COMPONENT,
            context_key,
            err = %err,
            "route module failed to load"
        ),
    }
}
