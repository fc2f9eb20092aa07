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

//! Renderable unit contract between route modules and the host runtime.

use crate::error::RenderError;
use crate::route_node::RouteNodeRef;
use serde_json::Value;
use std::sync::Arc;

/// Props passed to a component, keyed by prop name.
pub type Props = serde_json::Map<String, Value>;

/// Output of a render pass, consumed by the host runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Empty,
    Text(String),
    View {
        kind: String,
        props: Props,
        children: Vec<Element>,
    },
    /// Exposes the route identified by `context_key` to everything rendered in `child`.
    RouteScope {
        context_key: String,
        child: Box<Element>,
    },
    /// Placeholder rendered while the route's module is still resolving.
    Loading { context_key: String },
}

impl Element {
    pub fn view(kind: &str, children: Vec<Element>) -> Self {
        Element::View {
            kind: kind.to_string(),
            props: Props::new(),
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    /// The element beneath any route scopes wrapping it.
    pub fn unscoped(&self) -> &Element {
        match self {
            Element::RouteScope { child, .. } => child.unscoped(),
            other => other,
        }
    }
}

/// A renderable unit, typically a route module's default export.
pub trait Component: Send + Sync {
    fn render(&self, props: &Props, context: &RenderContext) -> Result<Element, RenderError>;
}

impl<F> Component for F
where
    F: Fn(&Props, &RenderContext) -> Result<Element, RenderError> + Send + Sync,
{
    fn render(&self, props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
        self(props, context)
    }
}

pub type ComponentRef = Arc<dyn Component>;

/// Replacement rendered when a route's default export fails.
///
/// Receives the failure and the same props the failing component was given.
pub trait ErrorBoundary: Send + Sync {
    fn render_error(
        &self,
        error: &RenderError,
        props: &Props,
        context: &RenderContext,
    ) -> Result<Element, RenderError>;
}

impl<F> ErrorBoundary for F
where
    F: Fn(&RenderError, &Props, &RenderContext) -> Result<Element, RenderError> + Send + Sync,
{
    fn render_error(
        &self,
        error: &RenderError,
        props: &Props,
        context: &RenderContext,
    ) -> Result<Element, RenderError> {
        self(error, props, context)
    }
}

pub type ErrorBoundaryRef = Arc<dyn ErrorBoundary>;

/// Route context visible to a component while it renders.
///
/// Adapted routes push their node before rendering their module, so any descendant
/// reads the nearest route through [`RenderContext::route_node`].
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    routes: Vec<RouteNodeRef>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(&self, route: RouteNodeRef) -> Self {
        let mut routes = self.routes.clone();
        routes.push(route);
        Self { routes }
    }

    /// Nearest enclosing route.
    pub fn route_node(&self) -> Option<&RouteNodeRef> {
        self.routes.last()
    }

    /// Enclosing routes above the nearest one, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &RouteNodeRef> {
        self.routes.iter().rev().skip(1)
    }
}
