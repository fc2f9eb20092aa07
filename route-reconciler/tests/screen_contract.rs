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

use integration_test_utils::{
    failing, init_logging, ready_route, tabs_layout, text_boundary,
};
use route_reconciler::{
    route_params, Element, LoadError, ModuleExports, ModuleLoad, OptionsArgs, OptionsSource,
    OrderEntry, Props, ReconcileError, ReconcilerConfig, Redirect, RenderContext, RenderError,
    RouteNode, RouteParams, RouteReconciler, ScreenDescriptor, EMPTY_ROUTE_KIND,
};
use serde_json::{json, Value};

fn names(screens: &[ScreenDescriptor]) -> Vec<&str> {
    screens.iter().map(|screen| screen.name.as_str()).collect()
}

fn screen<'a>(screens: &'a [ScreenDescriptor], name: &str) -> &'a ScreenDescriptor {
    screens
        .iter()
        .find(|screen| screen.name == name)
        .unwrap_or_else(|| panic!("no screen named {name}"))
}

#[test]
fn default_order_puts_index_first_and_dynamic_routes_last() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());

    let screens = reconciler.screens(&tabs_layout(), None).expect("reconciles");

    assert_eq!(names(&screens), vec!["index", "_sitemap", "settings", "[user]"]);
}

#[test]
fn explicit_order_precedes_sorted_remainder() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let order = [OrderEntry::new("settings"), OrderEntry::new("[user]")];

    let screens = reconciler
        .screens(&tabs_layout(), Some(&order))
        .expect("reconciles");

    assert_eq!(names(&screens), vec!["settings", "[user]", "index", "_sitemap"]);
}

#[test]
fn boolean_redirect_hides_screen_and_unknown_entries_are_skipped() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let order = [
        OrderEntry::new("_sitemap").with_redirect(Redirect::Enabled(true)),
        OrderEntry::new("profile"),
        OrderEntry::new("[user]"),
    ];

    let screens = reconciler
        .screens(&tabs_layout(), Some(&order))
        .expect("reconciles");

    assert_eq!(names(&screens), vec!["[user]", "index", "settings"]);
}

#[test]
fn string_redirect_halts_reconciliation() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let order = [
        OrderEntry::new("index"),
        OrderEntry::new("settings").with_redirect(Redirect::Target("/account".to_string())),
    ];

    let result = reconciler.screens(&tabs_layout(), Some(&order));

    assert_eq!(
        result.map(|screens| screens.len()),
        Err(ReconcileError::UnsupportedRedirect {
            route: "settings".to_string(),
            target: "/account".to_string(),
        })
    );
}

#[test]
fn generated_routes_are_hidden_from_navigation_chrome() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let order = [OrderEntry::new("_sitemap").with_options(OptionsSource::from_value(json!({
        "title": "Sitemap",
        "tabBarButton": "shown",
        "drawerItemStyle": {"height": 40},
    })))];

    let screens = reconciler
        .screens(&tabs_layout(), Some(&order))
        .expect("reconciles");
    let options = screen(&screens, "_sitemap").resolve_options(&OptionsArgs::default());

    assert_eq!(options.get("title"), Some(&json!("Sitemap")));
    assert_eq!(options.get("tabBarButton"), Some(&Value::Null));
    assert_eq!(
        options.get("drawerItemStyle"),
        Some(&json!({"height": 0, "display": "none"}))
    );
    assert!(screen(&screens, "index")
        .resolve_options(&OptionsArgs::default())
        .is_empty());
}

#[test]
fn dynamic_screen_ids_follow_parameter_bindings() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let screens = reconciler.screens(&tabs_layout(), None).expect("reconciles");
    let user = screen(&screens, "[user]");

    let ada = user.id_for(&route_params([("user", "ada")]));

    assert_eq!(ada, "ada");
    assert_eq!(user.id_for(&route_params([("user", "ada")])), ada);
    assert_ne!(user.id_for(&route_params([("user", "grace")])), ada);
    assert_eq!(user.id_for(&RouteParams::new()), "[user]");
    assert_eq!(
        user.id_for(&route_params([("user", "ada"), ("tab", "posts")])),
        "ada?tab=posts"
    );
}

#[test]
fn residual_params_on_static_leaf_fall_back_to_context_key() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let screens = reconciler.screens(&tabs_layout(), None).expect("reconciles");
    let index = screen(&screens, "index");

    let first = index.id_for(&route_params([("q", "abc")]));
    let second = index.id_for(&route_params([("q", "xyz")]));

    assert_eq!(first, "./(tabs)/index.tsx?q=abc");
    assert_ne!(first, second);
    assert_eq!(
        index.id_for(&route_params([("screen", "home"), ("params", "x")])),
        ""
    );
}

#[test]
fn rendered_screen_sees_segment_and_route_scope_only() {
    init_logging();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let screens = reconciler.screens(&tabs_layout(), None).expect("reconciles");
    let mut props = Props::new();
    props.insert("route".to_string(), json!({"key": "user-1"}));
    props.insert("navigation".to_string(), json!({}));
    props.insert("theme".to_string(), json!("dark"));

    let rendered = screen(&screens, "[user]")
        .component()
        .render(&props, &RenderContext::new())
        .expect("renders");

    assert_eq!(
        rendered,
        Element::RouteScope {
            context_key: "./(tabs)/[user].tsx".to_string(),
            child: Box::new(Element::text("[user]@./(tabs)/[user].tsx [segment,theme]")),
        }
    );
}

#[test]
fn error_boundary_export_handles_render_failures() {
    init_logging();
    let route = ready_route(
        "flaky",
        "./flaky.tsx",
        ModuleExports::new(failing("boom")).with_error_boundary(text_boundary()),
    );
    let reconciler = RouteReconciler::new("flaky", ReconcilerConfig::default());

    let rendered = reconciler
        .adapt(&route)
        .render(&Props::new(), &RenderContext::new())
        .expect("boundary renders");

    assert_eq!(rendered.unscoped(), &Element::text("caught: render failed: boom"));
}

#[test]
fn failures_without_boundary_reach_the_host() {
    init_logging();
    let failing_render = ready_route("flaky", "./flaky.tsx", ModuleExports::new(failing("boom")));
    let failing_load = RouteNode::builder("missing", "./missing.tsx", || {
        ModuleLoad::Failed(LoadError::Failed("module not found".to_string()))
    })
    .build();
    let reconciler = RouteReconciler::new("flaky", ReconcilerConfig::default());

    assert_eq!(
        reconciler
            .adapt(&failing_render)
            .render(&Props::new(), &RenderContext::new()),
        Err(RenderError::component("boom"))
    );
    assert_eq!(
        reconciler
            .adapt(&failing_load)
            .render(&Props::new(), &RenderContext::new()),
        Err(RenderError::Load(LoadError::Failed(
            "module not found".to_string()
        )))
    );
}

#[test]
fn empty_default_export_depends_on_configuration() {
    init_logging();
    let route = ready_route("blank", "./blank.tsx", ModuleExports::empty_default());

    let development = RouteReconciler::new("dev", ReconcilerConfig::default())
        .adapt(&route)
        .render(&Props::new(), &RenderContext::new())
        .expect("placeholder renders");
    let production = RouteReconciler::new("prod", ReconcilerConfig::default().production())
        .adapt(&route)
        .render(&Props::new(), &RenderContext::new())
        .expect("empty export renders");

    match development.unscoped() {
        Element::View { kind, children, .. } => {
            assert_eq!(kind, EMPTY_ROUTE_KIND);
            assert_eq!(
                children,
                &vec![Element::text(
                    "Missing default export in route module: ./blank.tsx"
                )]
            );
        }
        other => panic!("unexpected element: {other:?}"),
    }
    assert_eq!(production.unscoped(), &Element::Empty);
}

#[test]
fn nested_layouts_expose_ancestor_routes() {
    init_logging();
    let layout = tabs_layout();
    let reconciler = RouteReconciler::new("tabs", ReconcilerConfig::default());
    let outer_context = RenderContext::new().with_route(layout);

    let inspect = move |_: &Props, context: &RenderContext| -> Result<Element, RenderError> {
        let ancestors: Vec<String> = context
            .ancestors()
            .map(|route| route.name.clone())
            .collect();
        Ok(Element::text(ancestors.join("/")))
    };
    let inspector = ready_route(
        "inspector",
        "./(tabs)/inspector.tsx",
        ModuleExports::new(inspect),
    );

    let rendered = reconciler
        .adapt(&inspector)
        .render(&Props::new(), &outer_context)
        .expect("renders");

    assert_eq!(rendered.unscoped(), &Element::text("(tabs)"));
}
