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

use crate::adapter::module_exports::{ModuleLoad, RouteLoader};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Shared handle to an immutable [`RouteNode`].
///
/// The pointer identity of this handle, not the node's field values, is what the
/// adapter cache keys on.
pub type RouteNodeRef = Arc<RouteNode>;

/// One captured path parameter of a route.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DynamicSegment {
    pub name: String,
    /// `true` for catch-all segments capturing zero or more path components.
    #[serde(default)]
    pub deep: bool,
}

impl DynamicSegment {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            deep: false,
        }
    }

    pub fn catch_all(name: &str) -> Self {
        Self {
            name: name.to_string(),
            deep: true,
        }
    }
}

/// One file-system-derived route, as handed over by the tree-building collaborator.
///
/// Nodes are never mutated once built.
///
/// # Examples
///
/// ```
/// use route_reconciler::{DynamicSegment, ModuleExports, ModuleLoad, RouteNode};
///
/// let post = RouteNode::builder("[post]", "./[post].tsx", || {
///     ModuleLoad::Ready(ModuleExports::empty_default())
/// })
/// .dynamic(vec![DynamicSegment::new("post")])
/// .build();
///
/// let layout = RouteNode::builder("", "./_layout.tsx", || {
///     ModuleLoad::Ready(ModuleExports::empty_default())
/// })
/// .child(post)
/// .initial_route_name("[post]")
/// .build();
///
/// assert_eq!(layout.children.len(), 1);
/// assert!(layout.children[0].is_dynamic());
/// ```
pub struct RouteNode {
    pub name: String,
    pub context_key: String,
    pub children: Vec<RouteNodeRef>,
    pub initial_route_name: Option<String>,
    pub dynamic: Vec<DynamicSegment>,
    pub generated: bool,
    loader: Arc<dyn RouteLoader>,
}

impl RouteNode {
    pub fn builder<L>(name: &str, context_key: &str, loader: L) -> RouteNodeBuilder
    where
        L: RouteLoader + 'static,
    {
        RouteNodeBuilder {
            name: name.to_string(),
            context_key: context_key.to_string(),
            children: Vec::new(),
            initial_route_name: None,
            dynamic: Vec::new(),
            generated: false,
            loader: Arc::new(loader),
        }
    }

    /// Invokes the route's module loader.
    pub fn load_route(&self) -> ModuleLoad {
        self.loader.load_route()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_dynamic(&self) -> bool {
        !self.dynamic.is_empty()
    }

    pub fn is_catch_all(&self) -> bool {
        self.dynamic.iter().any(|segment| segment.deep)
    }
}

impl Debug for RouteNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteNode")
            .field("name", &self.name)
            .field("context_key", &self.context_key)
            .field("children", &self.children)
            .field("initial_route_name", &self.initial_route_name)
            .field("dynamic", &self.dynamic)
            .field("generated", &self.generated)
            .finish_non_exhaustive()
    }
}

/// Incremental constructor for [`RouteNode`].
pub struct RouteNodeBuilder {
    name: String,
    context_key: String,
    children: Vec<RouteNodeRef>,
    initial_route_name: Option<String>,
    dynamic: Vec<DynamicSegment>,
    generated: bool,
    loader: Arc<dyn RouteLoader>,
}

impl RouteNodeBuilder {
    pub fn child(mut self, child: RouteNodeRef) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RouteNodeRef>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn initial_route_name(mut self, initial_route_name: &str) -> Self {
        self.initial_route_name = Some(initial_route_name.to_string());
        self
    }

    pub fn dynamic(mut self, dynamic: Vec<DynamicSegment>) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    pub fn build(self) -> RouteNodeRef {
        Arc::new(RouteNode {
            name: self.name,
            context_key: self.context_key,
            children: self.children,
            initial_route_name: self.initial_route_name,
            dynamic: self.dynamic,
            generated: self.generated,
            loader: self.loader,
        })
    }
}
