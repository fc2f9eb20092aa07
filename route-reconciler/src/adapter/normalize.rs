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

//! Normalization of loaded module exports into a single renderable component.

use crate::adapter::component::{
    Component, ComponentRef, Element, ErrorBoundaryRef, Props, RenderContext,
};
use crate::adapter::module_exports::{DefaultExport, ModuleExports};
use crate::error::RenderError;
use crate::observability::{events, fields};
use crate::screen::options::OptionsSource;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "normalize";

pub const EMPTY_ROUTE_KIND: &str = "EmptyRoute";

/// A module reduced to what the adapter renders and what the descriptor reads.
#[derive(Clone)]
pub struct NormalizedModule {
    pub component: ComponentRef,
    pub screen_options: Option<OptionsSource>,
}

/// Normalizes `exports`.
///
/// An `ErrorBoundary` export wraps the default export so render failures are handed to
/// the boundary. An empty default export is replaced by the [`EmptyRoute`] placeholder
/// when `check_empty_default_export` is set, and accepted as-is otherwise.
pub fn from_import(exports: ModuleExports, check_empty_default_export: bool) -> NormalizedModule {
    let component: ComponentRef = match exports.default {
        DefaultExport::Component(component) => component,
        DefaultExport::Empty if check_empty_default_export => {
            debug!(
                event = events::EMPTY_DEFAULT_EXPORT_SUBSTITUTED,
                component = COMPONENT,
                "substituting placeholder for empty default export"
            );
            Arc::new(EmptyRoute)
        }
        DefaultExport::Empty => Arc::new(EmptyDefault),
    };

    let component: ComponentRef = match exports.error_boundary {
        Some(boundary) => Arc::new(WithErrorBoundary {
            inner: component,
            boundary,
        }),
        None => component,
    };

    NormalizedModule {
        component,
        screen_options: exports.screen_options,
    }
}

/// Placeholder telling the developer that a route has nothing to render.
pub struct EmptyRoute;

impl Component for EmptyRoute {
    fn render(&self, _props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
        let location = context
            .route_node()
            .map(|route| route.context_key.as_str())
            .unwrap_or(fields::NONE);

        Ok(Element::view(
            EMPTY_ROUTE_KIND,
            vec![Element::text(format!(
                "Missing default export in route module: {location}"
            ))],
        ))
    }
}

/// An empty default export accepted as-is.
struct EmptyDefault;

impl Component for EmptyDefault {
    fn render(&self, _props: &Props, _context: &RenderContext) -> Result<Element, RenderError> {
        Ok(Element::Empty)
    }
}

struct WithErrorBoundary {
    inner: ComponentRef,
    boundary: ErrorBoundaryRef,
}

impl Component for WithErrorBoundary {
    fn render(&self, props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
        match self.inner.render(props, context) {
            Ok(element) => Ok(element),
            Err(err) => {
                let route_label = context
                    .route_node()
                    .map(|route| fields::format_route_label(route))
                    .unwrap_or_else(|| fields::NONE.to_string());
                warn!(
                    event = events::ERROR_BOUNDARY_CAUGHT,
                    component = COMPONENT,
                    route = %route_label,
                    err = %err,
                    "error boundary caught render failure"
                );
                self.boundary.render_error(&err, props, context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{from_import, EMPTY_ROUTE_KIND};
    use crate::adapter::component::{Element, Props, RenderContext};
    use crate::adapter::module_exports::{ModuleExports, ModuleLoad};
    use crate::error::RenderError;
    use crate::route_node::RouteNode;
    use serde_json::json;

    fn failing(_: &Props, _: &RenderContext) -> Result<Element, RenderError> {
        Err(RenderError::component("kaboom"))
    }

    fn greeting(props: &Props, _: &RenderContext) -> Result<Element, RenderError> {
        Ok(Element::text(format!(
            "hello {}",
            props.get("who").and_then(|v| v.as_str()).unwrap_or("nobody")
        )))
    }

    fn boundary(
        error: &RenderError,
        props: &Props,
        _: &RenderContext,
    ) -> Result<Element, RenderError> {
        Ok(Element::text(format!(
            "caught {error} for {}",
            props.get("who").and_then(|v| v.as_str()).unwrap_or("nobody")
        )))
    }

    fn props() -> Props {
        let mut props = Props::new();
        props.insert("who".to_string(), json!("ada"));
        props
    }

    #[test]
    fn default_export_is_used_unmodified() {
        let module = from_import(ModuleExports::new(greeting), true);

        let rendered = module
            .component
            .render(&props(), &RenderContext::new())
            .expect("renders");

        assert_eq!(rendered, Element::text("hello ada"));
    }

    #[test]
    fn error_boundary_receives_error_and_same_props() {
        let module = from_import(ModuleExports::new(failing).with_error_boundary(boundary), true);

        let rendered = module
            .component
            .render(&props(), &RenderContext::new())
            .expect("boundary renders");

        assert_eq!(rendered, Element::text("caught render failed: kaboom for ada"));
    }

    #[test]
    fn error_boundary_is_transparent_when_render_succeeds() {
        let module = from_import(ModuleExports::new(greeting).with_error_boundary(boundary), true);

        let rendered = module
            .component
            .render(&props(), &RenderContext::new())
            .expect("renders");

        assert_eq!(rendered, Element::text("hello ada"));
    }

    #[test]
    fn failures_without_boundary_propagate() {
        let module = from_import(ModuleExports::new(failing), true);

        let error = module
            .component
            .render(&props(), &RenderContext::new())
            .expect_err("no boundary to catch");

        assert_eq!(error, RenderError::component("kaboom"));
    }

    #[test]
    fn empty_default_becomes_placeholder_when_checked() {
        let route = RouteNode::builder("blank", "./blank.tsx", || {
            ModuleLoad::Ready(ModuleExports::empty_default())
        })
        .build();
        let module = from_import(ModuleExports::empty_default(), true);

        let rendered = module
            .component
            .render(&Props::new(), &RenderContext::new().with_route(route))
            .expect("placeholder renders");

        match rendered {
            Element::View { kind, children, .. } => {
                assert_eq!(kind, EMPTY_ROUTE_KIND);
                assert_eq!(
                    children,
                    vec![Element::text("Missing default export in route module: ./blank.tsx")]
                );
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn empty_default_is_accepted_when_unchecked() {
        let module = from_import(ModuleExports::empty_default(), false);

        let rendered = module
            .component
            .render(&Props::new(), &RenderContext::new())
            .expect("renders");

        assert_eq!(rendered, Element::Empty);
    }

    #[test]
    fn empty_default_placeholder_is_still_wrapped_by_boundary() {
        let module = from_import(
            ModuleExports::empty_default().with_error_boundary(boundary),
            true,
        );

        let rendered = module
            .component
            .render(&Props::new(), &RenderContext::new())
            .expect("renders");

        assert!(matches!(rendered, Element::View { ref kind, .. } if kind == EMPTY_ROUTE_KIND));
    }
}
