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

//! Merges an author-declared ordering list with the discovered children.

use crate::error::ReconcileError;
use crate::observability::events;
use crate::ordering::comparator::sort_routes_with_initial;
use crate::ordering::order_entry::{OrderEntry, OrderedRoute, Redirect, ScreenProps};
use crate::route_node::RouteNodeRef;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

const COMPONENT: &str = "order_reconciler";

/// Non-fatal ordering problem. The offending entry contributes nothing to the output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrderDiagnostic {
    /// More entries were declared than there are children left to match.
    ExtraneousEntry { name: String },
    /// No remaining child carries the entry's name.
    MissingChild { name: String, available: Vec<String> },
}

impl Display for OrderDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderDiagnostic::ExtraneousEntry { name } => write!(
                f,
                "too many screens defined, route \"{name}\" is extraneous"
            ),
            OrderDiagnostic::MissingChild { name, available } => write!(
                f,
                "no route named \"{name}\" exists in nested children: [{}]",
                available.join(", ")
            ),
        }
    }
}

/// Ordered routes plus every diagnostic raised while producing them.
#[derive(Debug, Default)]
pub struct Reconciliation {
    pub routes: Vec<OrderedRoute>,
    pub diagnostics: Vec<OrderDiagnostic>,
}

impl Reconciliation {
    pub fn route_names(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|ordered| ordered.route.name.as_str())
            .collect()
    }
}

/// Orders `children` against `order`.
///
/// Declared entries are processed in sequence, each consuming at most one child with a
/// matching name. Children left unconsumed are appended afterwards, sorted with the
/// initial route pinned first. A string redirect target aborts the whole reconciliation.
pub fn reconcile_order(
    children: &[RouteNodeRef],
    order: Option<&[OrderEntry]>,
    initial_route_name: Option<&str>,
) -> Result<Reconciliation, ReconcileError> {
    let compare = sort_routes_with_initial(initial_route_name);

    let Some(order) = order.filter(|order| !order.is_empty()) else {
        let mut sorted = children.to_vec();
        sorted.sort_by(|a, b| compare(a, b));
        return Ok(Reconciliation {
            routes: sorted.into_iter().map(OrderedRoute::unordered).collect(),
            diagnostics: Vec::new(),
        });
    };

    let mut remaining = children.to_vec();
    let mut routes = Vec::with_capacity(children.len());
    let mut diagnostics = Vec::new();

    for entry in order {
        if remaining.is_empty() {
            warn!(
                event = events::ORDER_ENTRY_EXTRANEOUS,
                component = COMPONENT,
                entry = %entry.name,
                "ordering entry has no child left to match"
            );
            diagnostics.push(OrderDiagnostic::ExtraneousEntry {
                name: entry.name.clone(),
            });
            continue;
        }

        let Some(position) = remaining.iter().position(|node| node.name == entry.name) else {
            let available: Vec<String> = remaining.iter().map(|node| node.name.clone()).collect();
            warn!(
                event = events::ORDER_ENTRY_MISSING_CHILD,
                component = COMPONENT,
                entry = %entry.name,
                available = ?available,
                "ordering entry does not name an existing child"
            );
            diagnostics.push(OrderDiagnostic::MissingChild {
                name: entry.name.clone(),
                available,
            });
            continue;
        };

        let matched = remaining.remove(position);

        match &entry.redirect {
            Some(Redirect::Target(target)) if !target.is_empty() => {
                warn!(
                    event = events::ORDER_ENTRY_REDIRECT_REJECTED,
                    component = COMPONENT,
                    entry = %entry.name,
                    target = %target,
                    "redirect targets are not supported"
                );
                return Err(ReconcileError::UnsupportedRedirect {
                    route: entry.name.clone(),
                    target: target.clone(),
                });
            }
            Some(Redirect::Enabled(true)) => {
                debug!(
                    event = events::ORDER_ENTRY_REDIRECT_DROPPED,
                    component = COMPONENT,
                    entry = %entry.name,
                    "screen hidden by boolean redirect"
                );
                continue;
            }
            _ => {}
        }

        routes.push(OrderedRoute {
            route: matched,
            props: ScreenProps::from(entry),
        });
    }

    remaining.sort_by(|a, b| compare(a, b));
    routes.extend(remaining.into_iter().map(OrderedRoute::unordered));

    Ok(Reconciliation {
        routes,
        diagnostics,
    })
}
