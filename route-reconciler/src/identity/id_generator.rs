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

//! Screen identifiers derived from dynamic segments and residual search parameters.

use crate::identity::route_params::{ParamValue, RouteParams, RESERVED_PARAM_KEYS};
use crate::route_node::{DynamicSegment, RouteNode};
use std::sync::Arc;

/// Maps a parameter bag to a screen identifier.
pub type GetIdFn = Arc<dyn Fn(&RouteParams) -> String + Send + Sync>;

/// Builds the identifier function for `route`.
///
/// Equal bindings of the route's dynamic segments yield equal identifiers. On leaf
/// routes every other non-reserved parameter is appended as `key=value` pairs, so
/// screens that differ only by search parameters get distinct identifiers.
///
/// ```
/// use route_reconciler::{make_id_generator, route_params, DynamicSegment, ModuleExports};
/// use route_reconciler::{ModuleLoad, RouteNode};
///
/// let post = RouteNode::builder("[post]", "./[post].tsx", || {
///     ModuleLoad::Ready(ModuleExports::empty_default())
/// })
/// .dynamic(vec![DynamicSegment::new("post")])
/// .build();
///
/// let get_id = make_id_generator(&post);
/// assert_eq!(get_id(&route_params([("post", "42")])), "42");
/// assert_eq!(get_id(&route_params([("post", "42"), ("tab", "comments")])), "42?tab=comments");
/// assert_eq!(get_id(&Default::default()), "[post]");
/// ```
pub fn make_id_generator(route: &RouteNode) -> GetIdFn {
    let segments = unique_segments(&route.dynamic);
    let include_search_params = route.is_leaf();
    let context_key = route.context_key.clone();

    Arc::new(move |params: &RouteParams| {
        generate_id(&segments, include_search_params, &context_key, params)
    })
}

// Later declarations of a repeated name replace the earlier one in place.
fn unique_segments(dynamic: &[DynamicSegment]) -> Vec<DynamicSegment> {
    let mut segments: Vec<DynamicSegment> = Vec::with_capacity(dynamic.len());
    for segment in dynamic {
        match segments.iter_mut().find(|known| known.name == segment.name) {
            Some(known) => *known = segment.clone(),
            None => segments.push(segment.clone()),
        }
    }
    segments
}

fn generate_id(
    segments: &[DynamicSegment],
    include_search_params: bool,
    context_key: &str,
    params: &RouteParams,
) -> String {
    let base = segments
        .iter()
        .map(|segment| segment_value(segment, params.get(&segment.name)))
        .collect::<Vec<_>>()
        .join("/");

    if !include_search_params {
        return base;
    }

    let search = params
        .iter()
        .filter(|(key, _)| {
            !RESERVED_PARAM_KEYS.contains(&key.as_str())
                && !segments.iter().any(|segment| &segment.name == *key)
        })
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    if search.is_empty() {
        // An all-static leaf without search parameters yields "" here, callers treat
        // that as "use the default screen identity".
        return base;
    }

    if base.is_empty() {
        format!("{context_key}?{search}")
    } else {
        format!("{base}?{search}")
    }
}

fn segment_value(segment: &DynamicSegment, value: Option<&ParamValue>) -> String {
    match value.filter(|value| value.is_present()) {
        Some(ParamValue::Multi(values)) => values.join("/"),
        Some(ParamValue::Single(value)) => value.clone(),
        None if segment.deep => format!("[...{}]", segment.name),
        None => format!("[{}]", segment.name),
    }
}
