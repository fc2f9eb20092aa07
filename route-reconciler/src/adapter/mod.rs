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

//! Component adaptation.
//!
//! Route modules are loaded through their node's [`RouteLoader`](module_exports::RouteLoader),
//! normalized once by [`normalize::from_import`], and wrapped in an
//! [`AdaptedComponent`](adapted::AdaptedComponent) that the
//! [`ComponentCache`](component_cache::ComponentCache) memoizes per node identity.

pub(crate) mod adapted;
pub(crate) mod component;
pub(crate) mod component_cache;
pub(crate) mod module_exports;
pub(crate) mod normalize;
pub(crate) mod route_identity;

use std::sync::{Mutex, MutexGuard, PoisonError};

// Guarded state is only ever replaced wholesale, so a poisoned lock is still consistent.
pub(crate) fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
