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

//! Value-format helpers for structured log fields.

use crate::route_node::RouteNode;

pub const NONE: &str = "none";
pub const ROOT_ROUTE_LABEL: &str = "<root>";

/// Human-readable label for a route, substituting a marker for the root segment.
pub fn format_route_label(route: &RouteNode) -> String {
    if route.name.is_empty() {
        ROOT_ROUTE_LABEL.to_string()
    } else {
        route.name.clone()
    }
}

pub fn format_optional(value: Option<&str>) -> String {
    value.unwrap_or(NONE).to_string()
}
