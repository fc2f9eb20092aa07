/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
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

use route_reconciler::{
    DynamicSegment, LoadError, ModuleExports, ModuleLoad, RouteNode, RouteNodeRef,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use crate::labelled;

/// Leaf route whose loader returns a clone of `exports` synchronously.
pub fn ready_route(name: &str, context_key: &str, exports: ModuleExports) -> RouteNodeRef {
    RouteNode::builder(name, context_key, move || ModuleLoad::Ready(exports.clone())).build()
}

/// Number of times a route's loader ran.
#[derive(Clone, Default)]
pub struct LoadCounter(Arc<AtomicUsize>);

impl LoadCounter {
    pub fn loads(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Leaf route rendering `name` whose loader invocations are counted.
pub fn counting_route(name: &str) -> (RouteNodeRef, LoadCounter) {
    let counter = LoadCounter::default();
    let loads = counter.0.clone();
    let label = name.to_string();
    let route = RouteNode::builder(name, &format!("./{name}.tsx"), move || {
        loads.fetch_add(1, Ordering::SeqCst);
        ModuleLoad::Ready(ModuleExports::new(labelled(&label)))
    })
    .build();
    (route, counter)
}

/// Handle resolving the module of a route built by [`deferred_route`].
pub struct DeferredModule {
    sender: oneshot::Sender<ModuleExports>,
}

impl DeferredModule {
    /// Returns `false` if the pending load was already abandoned.
    pub fn resolve(self, exports: ModuleExports) -> bool {
        self.sender.send(exports).is_ok()
    }
}

/// Route whose module stays pending until [`DeferredModule::resolve`] is called.
///
/// The loader can run once; a second invocation reports a load failure.
pub fn deferred_route(name: &str) -> (RouteNodeRef, DeferredModule) {
    let (sender, receiver) = oneshot::channel();
    let receiver = Mutex::new(Some(receiver));
    let route = RouteNode::builder(name, &format!("./{name}.tsx"), move || {
        let taken = receiver
            .lock()
            .map(|mut receiver| receiver.take())
            .unwrap_or(None);
        match taken {
            Some(receiver) => ModuleLoad::pending(async move {
                receiver
                    .await
                    .map_err(|_| LoadError::Failed("deferred module dropped".to_string()))
            }),
            None => ModuleLoad::Failed(LoadError::Failed(
                "deferred module loaded twice".to_string(),
            )),
        }
    })
    .build();
    (route, DeferredModule { sender })
}

/// `(tabs)` layout with `index`, `[user]`, `settings` and a generated `_sitemap` child.
pub fn tabs_layout() -> RouteNodeRef {
    let sitemap = RouteNode::builder("_sitemap", "./_sitemap.tsx", || {
        ModuleLoad::Ready(ModuleExports::new(labelled("sitemap")))
    })
    .generated(true)
    .build();
    let user = RouteNode::builder("[user]", "./(tabs)/[user].tsx", || {
        ModuleLoad::Ready(ModuleExports::new(crate::segment_echo))
    })
    .dynamic(vec![DynamicSegment::new("user")])
    .build();

    RouteNode::builder("(tabs)", "./(tabs)/_layout.tsx", || {
        ModuleLoad::Ready(ModuleExports::empty_default())
    })
    .children([
        ready_route(
            "settings",
            "./(tabs)/settings.tsx",
            ModuleExports::new(labelled("settings")),
        ),
        user,
        ready_route("index", "./(tabs)/index.tsx", ModuleExports::new(labelled("index"))),
        sitemap,
    ])
    .build()
}
