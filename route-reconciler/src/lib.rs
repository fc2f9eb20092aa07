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

//! # route-reconciler
//!
//! `route-reconciler` turns a file-system-derived route tree into the ordered list of
//! screen descriptors a navigation runtime registers.
//!
//! Typical usage is API-first and centered on [`RouteReconciler`], which owns the
//! adapter cache for one route tree. The layers it composes are also exported for
//! callers that need them individually:
//!
//! - ordering: [`sort_routes`] and [`reconcile_order`],
//! - identity: [`make_id_generator`],
//! - adaptation: [`ComponentCache`] and [`AdaptedComponent`],
//! - screens: [`build_screens`] and [`ScreenDescriptor`].
//!
//! ## Quick start
//!
//! ```
//! use route_reconciler::{
//!     route_params, DynamicSegment, Element, ModuleExports, ModuleLoad, OrderEntry,
//!     Props, ReconcilerConfig, RenderContext, RenderError, RouteNode, RouteReconciler,
//! };
//!
//! fn post(props: &Props, _: &RenderContext) -> Result<Element, RenderError> {
//!     Ok(Element::text(format!("segment {}", props["segment"])))
//! }
//!
//! let layout = RouteNode::builder("(app)", "./(app)/_layout.tsx", || {
//!     ModuleLoad::Ready(ModuleExports::empty_default())
//! })
//! .child(
//!     RouteNode::builder("[post]", "./(app)/[post].tsx", || {
//!         ModuleLoad::Ready(ModuleExports::new(post))
//!     })
//!     .dynamic(vec![DynamicSegment::new("post")])
//!     .build(),
//! )
//! .child(
//!     RouteNode::builder("index", "./(app)/index.tsx", || {
//!         ModuleLoad::Ready(ModuleExports::empty_default())
//!     })
//!     .build(),
//! )
//! .build();
//!
//! let reconciler = RouteReconciler::new("app", ReconcilerConfig::default());
//! let screens = reconciler
//!     .screens(&layout, Some(&[OrderEntry::new("[post]")]))
//!     .unwrap();
//!
//! assert_eq!(screens[0].name, "[post]");
//! assert_eq!(screens[0].id_for(&route_params([("post", "42")])), "42");
//! assert_eq!(screens[1].name, "index");
//! ```
//!
//! ## Observability
//!
//! The library emits `tracing` events and never installs a subscriber; binaries and
//! tests choose their own. Every event carries an `event` field naming one of the
//! constants in [`observability::events`] and a `component` field naming the emitting
//! layer. Ordering mismatches log at `warn`, cache and module lifecycle at `debug`.

pub mod config;
pub mod error;
pub mod observability;

mod adapter;
mod identity;
mod ordering;
mod reconciler;
mod route_node;
mod screen;

pub use adapter::adapted::{
    default_fallback, AdaptedComponent, FallbackFn, SEGMENT_PROP, STRIPPED_PROPS,
};
pub use adapter::component::{
    Component, ComponentRef, Element, ErrorBoundary, ErrorBoundaryRef, Props, RenderContext,
};
pub use adapter::component_cache::ComponentCache;
pub use adapter::module_exports::{
    DefaultExport, ModuleExports, ModuleLoad, PendingModule, RouteLoader,
};
pub use adapter::normalize::{from_import, EmptyRoute, NormalizedModule, EMPTY_ROUTE_KIND};
pub use config::{ImportMode, ReconcilerConfig};
pub use error::{LoadError, ReconcileError, RenderError};
pub use identity::id_generator::{make_id_generator, GetIdFn};
pub use identity::route_params::{route_params, ParamValue, RouteParams, RESERVED_PARAM_KEYS};
pub use ordering::comparator::{sort_routes, sort_routes_with_initial};
pub use ordering::order_entry::{
    ListenerFn, OrderEntry, OrderedRoute, Redirect, ScreenListeners, ScreenProps,
};
pub use ordering::order_reconciler::{reconcile_order, OrderDiagnostic, Reconciliation};
pub use reconciler::RouteReconciler;
pub use route_node::{DynamicSegment, RouteNode, RouteNodeBuilder, RouteNodeRef};
pub use screen::descriptor::{build_screens, GetComponentFn, ScreenDescriptor};
pub use screen::options::{
    hide_from_navigation_chrome, merge_options, OptionsArgs, OptionsFn, OptionsSource,
    ScreenOptions, DRAWER_ITEM_STYLE_OPTION, TAB_BAR_BUTTON_OPTION,
};
