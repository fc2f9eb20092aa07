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

//! Screen descriptors: one registration unit per visible route.

use crate::adapter::adapted::AdaptedComponent;
use crate::adapter::component_cache::ComponentCache;
use crate::config::ImportMode;
use crate::identity::id_generator::{make_id_generator, GetIdFn};
use crate::identity::route_params::RouteParams;
use crate::observability::{events, fields};
use crate::ordering::order_entry::{OrderedRoute, ScreenListeners};
use crate::route_node::RouteNodeRef;
use crate::screen::options::{
    hide_from_navigation_chrome, merge_options, OptionsArgs, OptionsFn, OptionsSource,
    ScreenOptions,
};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

const COMPONENT: &str = "screen_descriptor";

pub type GetComponentFn = Arc<dyn Fn() -> Arc<AdaptedComponent> + Send + Sync>;

/// Everything the host runtime needs to register one screen.
#[derive(Clone)]
pub struct ScreenDescriptor {
    pub route: RouteNodeRef,
    pub name: String,
    pub get_id: GetIdFn,
    pub options: OptionsFn,
    pub get_component: GetComponentFn,
    pub initial_params: Option<RouteParams>,
    pub listeners: Option<ScreenListeners>,
}

impl ScreenDescriptor {
    pub fn id_for(&self, params: &RouteParams) -> String {
        (self.get_id)(params)
    }

    pub fn resolve_options(&self, args: &OptionsArgs) -> ScreenOptions {
        (self.options)(args)
    }

    pub fn component(&self) -> Arc<AdaptedComponent> {
        (self.get_component)()
    }
}

impl Debug for ScreenDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenDescriptor")
            .field("name", &self.name)
            .field("context_key", &self.route.context_key)
            .field("initial_params", &self.initial_params)
            .field("has_listeners", &self.listeners.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds one descriptor per reconciled route, in order.
///
/// Components come from `cache`. In eager mode they are adapted here; otherwise only
/// when the host first calls [`ScreenDescriptor::component`].
pub fn build_screens(
    routes: &[OrderedRoute],
    cache: &Arc<ComponentCache>,
) -> Vec<ScreenDescriptor> {
    let screens: Vec<ScreenDescriptor> = routes
        .iter()
        .map(|ordered| build_screen(ordered, cache))
        .collect();

    debug!(
        event = events::SCREEN_DESCRIPTORS_BUILT,
        component = COMPONENT,
        screens = screens.len(),
        import_mode = ?cache.import_mode(),
        "built screen descriptors"
    );
    screens
}

fn build_screen(ordered: &OrderedRoute, cache: &Arc<ComponentCache>) -> ScreenDescriptor {
    let route = ordered.route.clone();

    let get_id = ordered
        .props
        .get_id
        .clone()
        .unwrap_or_else(|| make_id_generator(&route));

    ScreenDescriptor {
        name: route.name.clone(),
        get_id,
        options: options_fn(&route, ordered.props.options.clone(), cache),
        get_component: component_fn(&route, cache),
        initial_params: ordered.props.initial_params.clone(),
        listeners: ordered.props.listeners.clone(),
        route,
    }
}

fn component_fn(route: &RouteNodeRef, cache: &Arc<ComponentCache>) -> GetComponentFn {
    match cache.import_mode() {
        ImportMode::Eager => {
            let adapted = cache.adapt(route);
            Arc::new(move || adapted.clone())
        }
        ImportMode::Lazy => {
            let route = route.clone();
            let cache = cache.clone();
            Arc::new(move || cache.adapt(&route))
        }
    }
}

fn options_fn(
    route: &RouteNodeRef,
    overrides: Option<OptionsSource>,
    cache: &Arc<ComponentCache>,
) -> OptionsFn {
    if !route.generated {
        return Arc::new(move |args: &OptionsArgs| {
            overrides
                .as_ref()
                .map(|source| source.resolve(args))
                .unwrap_or_default()
        });
    }

    let route = route.clone();
    let cache = cache.clone();
    Arc::new(move |args: &OptionsArgs| {
        let mut options = ScreenOptions::new();

        let adapted = cache.adapt(&route);
        match adapted.screen_options() {
            Some(declared) => merge_options(&mut options, declared.resolve(args)),
            None if !adapted.is_resolved() => debug!(
                event = events::SCREEN_OPTIONS_PENDING_MODULE,
                component = COMPONENT,
                route = %fields::format_route_label(&route),
                "module options unavailable until the route module resolves"
            ),
            None => {}
        }

        if let Some(overrides) = &overrides {
            merge_options(&mut options, overrides.resolve(args));
        }
        hide_from_navigation_chrome(&mut options);
        options
    })
}

#[cfg(test)]
mod tests {
    use super::build_screens;
    use crate::adapter::component::{Element, Props, RenderContext};
    use crate::adapter::component_cache::ComponentCache;
    use crate::adapter::module_exports::{ModuleExports, ModuleLoad};
    use crate::config::ReconcilerConfig;
    use crate::error::RenderError;
    use crate::identity::route_params::{route_params, RouteParams};
    use crate::ordering::order_entry::{OrderEntry, OrderedRoute, ScreenProps};
    use crate::route_node::{DynamicSegment, RouteNode, RouteNodeRef};
    use crate::screen::options::{OptionsArgs, OptionsSource};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn hello(_: &Props, _: &RenderContext) -> Result<Element, RenderError> {
        Ok(Element::text("hello"))
    }

    fn module_with_title(title: &'static str) -> ModuleExports {
        ModuleExports::new(hello)
            .with_screen_options(OptionsSource::from_value(json!({ "title": title })))
    }

    fn generated_node() -> RouteNodeRef {
        RouteNode::builder("_sitemap", "./_sitemap.tsx", || {
            ModuleLoad::Ready(module_with_title("Sitemap"))
        })
        .generated(true)
        .build()
    }

    fn unordered(route: RouteNodeRef) -> OrderedRoute {
        OrderedRoute {
            route,
            props: ScreenProps::default(),
        }
    }

    fn with_props(route: RouteNodeRef, entry: &OrderEntry) -> OrderedRoute {
        OrderedRoute {
            route,
            props: ScreenProps::from(entry),
        }
    }

    fn eager_cache() -> Arc<ComponentCache> {
        Arc::new(ComponentCache::new(&ReconcilerConfig::default()))
    }

    #[test]
    fn generated_routes_merge_module_and_override_options_then_hide_chrome() {
        let entry = OrderEntry::new("_sitemap").with_options(OptionsSource::from_value(json!({
            "headerShown": false,
            "tabBarButton": "visible",
        })));
        let screens = build_screens(&[with_props(generated_node(), &entry)], &eager_cache());

        let options = screens[0].resolve_options(&OptionsArgs::default());

        assert_eq!(options.get("title"), Some(&json!("Sitemap")));
        assert_eq!(options.get("headerShown"), Some(&json!(false)));
        assert_eq!(options.get("tabBarButton"), Some(&Value::Null));
        assert_eq!(
            options.get("drawerItemStyle"),
            Some(&json!({"height": 0, "display": "none"}))
        );
    }

    #[test]
    fn override_options_win_over_module_options() {
        let entry = OrderEntry::new("_sitemap")
            .with_options(OptionsSource::from_value(json!({"title": "Override"})));
        let screens = build_screens(&[with_props(generated_node(), &entry)], &eager_cache());

        let options = screens[0].resolve_options(&OptionsArgs::default());

        assert_eq!(options.get("title"), Some(&json!("Override")));
    }

    #[test]
    fn authored_routes_ignore_module_options() {
        let route = RouteNode::builder("about", "./about.tsx", || {
            ModuleLoad::Ready(module_with_title("About"))
        })
        .build();

        let screens = build_screens(&[unordered(route)], &eager_cache());

        assert!(screens[0].resolve_options(&OptionsArgs::default()).is_empty());
    }

    #[test]
    fn dynamic_override_options_receive_call_arguments() {
        let entry = OrderEntry::new("post").with_options(OptionsSource::dynamic(|args| {
            let mut options = serde_json::Map::new();
            options.insert("title".to_string(), json!(args.route_name));
            options
        }));
        let route = RouteNode::builder("post", "./post.tsx", || {
            ModuleLoad::Ready(ModuleExports::new(hello))
        })
        .build();

        let screens = build_screens(&[with_props(route, &entry)], &eager_cache());
        let options = screens[0].resolve_options(&OptionsArgs::new("post", RouteParams::new()));

        assert_eq!(options.get("title"), Some(&json!("post")));
    }

    #[test]
    fn get_id_defaults_to_identifier_generator() {
        let route = RouteNode::builder("[post]", "./[post].tsx", || {
            ModuleLoad::Ready(ModuleExports::new(hello))
        })
        .dynamic(vec![DynamicSegment::new("post")])
        .build();

        let screens = build_screens(&[unordered(route)], &eager_cache());

        assert_eq!(screens[0].id_for(&route_params([("post", "42")])), "42");
        assert_eq!(screens[0].id_for(&RouteParams::new()), "[post]");
    }

    #[test]
    fn get_id_override_replaces_identifier_generator() {
        let entry = OrderEntry::new("index").with_get_id(|_| "fixed".to_string());
        let route = RouteNode::builder("index", "./index.tsx", || {
            ModuleLoad::Ready(ModuleExports::new(hello))
        })
        .build();

        let screens = build_screens(&[with_props(route, &entry)], &eager_cache());

        assert_eq!(screens[0].id_for(&route_params([("q", "abc")])), "fixed");
    }

    #[test]
    fn initial_params_and_listeners_pass_through() {
        let mut listeners = crate::ordering::order_entry::ScreenListeners::new();
        listeners.insert("focus".to_string(), Arc::new(|_: &Value| {}) as _);
        let entry = OrderEntry::new("index")
            .with_initial_params(route_params([("tab", "home")]))
            .with_listeners(listeners);
        let route = RouteNode::builder("index", "./index.tsx", || {
            ModuleLoad::Ready(ModuleExports::new(hello))
        })
        .build();

        let screens = build_screens(&[with_props(route, &entry)], &eager_cache());

        assert_eq!(
            screens[0].initial_params,
            Some(route_params([("tab", "home")]))
        );
        assert!(screens[0]
            .listeners
            .as_ref()
            .is_some_and(|listeners| listeners.contains_key("focus")));
    }

    #[test]
    fn eager_mode_adapts_during_build() {
        let cache = eager_cache();
        let route = generated_node();

        build_screens(&[unordered(route.clone())], &cache);

        assert!(cache.contains(&route));
    }

    #[test]
    fn lazy_mode_defers_adaptation_until_component_is_requested() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let route = RouteNode::builder("index", "./index.tsx", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ModuleLoad::Ready(ModuleExports::new(hello))
        })
        .build();
        let cache = Arc::new(ComponentCache::new(&ReconcilerConfig::lazy()));

        let screens = build_screens(&[unordered(route.clone())], &cache);
        assert!(!cache.contains(&route));

        let first = screens[0].component();
        let second = screens[0].component();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains(&route));
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn generated_route_with_pending_module_still_hides_chrome() {
        let route = RouteNode::builder("_sitemap", "./_sitemap.tsx", || {
            ModuleLoad::pending(futures::future::pending())
        })
        .generated(true)
        .build();
        let cache = Arc::new(ComponentCache::new(&ReconcilerConfig::lazy()));

        let screens = build_screens(&[unordered(route)], &cache);
        let options = screens[0].resolve_options(&OptionsArgs::default());

        assert_eq!(options.get("tabBarButton"), Some(&Value::Null));
        assert!(options.get("title").is_none());
    }
}
