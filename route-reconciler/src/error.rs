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

//! Failure types shared across ordering, loading and rendering.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fatal reconciliation failures. Every other ordering problem is a diagnostic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReconcileError {
    UnsupportedRedirect { route: String, target: String },
}

impl Display for ReconcileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileError::UnsupportedRedirect { route, target } => write!(
                f,
                "redirecting screen \"{route}\" to \"{target}\" is not supported, \
                 use a boolean redirect to hide the screen instead"
            ),
        }
    }
}

impl Error for ReconcileError {}

/// Failures resolving a route module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadError {
    Failed(String),
    /// The loader handed back a pending module while the eager import mode was active.
    PendingInEagerMode,
    /// The route tree owning this module was dropped before the module was needed.
    RouteDiscarded(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Failed(reason) => write!(f, "route module failed to load: {reason}"),
            LoadError::PendingInEagerMode => {
                write!(f, "route module is still pending in eager import mode")
            }
            LoadError::RouteDiscarded(context_key) => {
                write!(f, "route {context_key} was discarded with its route tree")
            }
        }
    }
}

impl Error for LoadError {}

/// Failures raised while rendering an adapted route.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    Component(String),
    Load(LoadError),
}

impl RenderError {
    pub fn component(message: impl Into<String>) -> Self {
        RenderError::Component(message.into())
    }
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Component(message) => write!(f, "render failed: {message}"),
            RenderError::Load(err) => write!(f, "unable to render route: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Load(err) => Some(err),
            RenderError::Component(_) => None,
        }
    }
}

impl From<LoadError> for RenderError {
    fn from(err: LoadError) -> Self {
        RenderError::Load(err)
    }
}
