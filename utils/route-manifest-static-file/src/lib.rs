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

//! Route trees read from a JSON5 manifest instead of a scanned directory.
//!
//! Every route in the manifest carries a static module description; the loaders built
//! from it render fixed text, fail on purpose, or resolve asynchronously, which is
//! enough to drive a reconciler end to end without a real module system.

use route_reconciler::{
    DynamicSegment, Element, LoadError, ModuleExports, ModuleLoad, OptionsSource, Props,
    RenderContext, RenderError, RouteNode, RouteNodeRef, ScreenOptions, SEGMENT_PROP,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, canonicalize};
use std::path::PathBuf;
use route_reconciler::observability::events;
use tracing::debug;

const COMPONENT: &str = "route_manifest_static_file";
const SEGMENT_PLACEHOLDER: &str = "{segment}";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ManifestError {
    NotFound(String),
    Read(String),
    Parse(String),
    Invalid(String),
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::NotFound(reason) => write!(f, "route manifest not found: {reason}"),
            ManifestError::Read(reason) => write!(f, "unable to read route manifest: {reason}"),
            ManifestError::Parse(reason) => write!(f, "unable to parse route manifest: {reason}"),
            ManifestError::Invalid(reason) => write!(f, "invalid route manifest: {reason}"),
        }
    }
}

impl Error for ManifestError {}

/// One route of the manifest.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RouteManifest {
    pub name: String,
    pub context_key: String,
    #[serde(default)]
    pub initial_route_name: Option<String>,
    #[serde(default)]
    pub dynamic: Vec<DynamicSegment>,
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub module: ModuleManifest,
    #[serde(default)]
    pub children: Vec<RouteManifest>,
}

/// Static description of what a route's module exports.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ModuleManifest {
    /// Rendered text; `{segment}` is replaced with the route's segment prop.
    #[serde(default)]
    pub text: Option<String>,
    /// Export an empty default instead of a component.
    #[serde(default)]
    pub empty_default: bool,
    /// Make the default export fail to render with this message.
    #[serde(default)]
    pub render_error: Option<String>,
    /// Export an error boundary rendering this text followed by the failure.
    #[serde(default)]
    pub error_boundary: Option<String>,
    #[serde(default)]
    pub options: Option<ScreenOptions>,
    /// Fail the load itself with this reason.
    #[serde(default)]
    pub load_error: Option<String>,
    /// Resolve through a pending future instead of synchronously.
    #[serde(default)]
    pub asynchronous: bool,
}

impl ModuleManifest {
    fn exports(&self) -> ModuleExports {
        let mut exports = if self.empty_default {
            ModuleExports::empty_default()
        } else if let Some(message) = self.render_error.clone() {
            ModuleExports::new(
                move |_: &Props, _: &RenderContext| -> Result<Element, RenderError> {
                    Err(RenderError::component(message.clone()))
                },
            )
        } else {
            let text = self.text.clone().unwrap_or_default();
            ModuleExports::new(
                move |props: &Props, _: &RenderContext| -> Result<Element, RenderError> {
                    let segment = props
                        .get(SEGMENT_PROP)
                        .and_then(|value| value.as_str())
                        .unwrap_or_default();
                    Ok(Element::text(text.replace(SEGMENT_PLACEHOLDER, segment)))
                },
            )
        };

        if let Some(label) = self.error_boundary.clone() {
            exports = exports.with_error_boundary(
                move |error: &RenderError,
                      _: &Props,
                      _: &RenderContext|
                      -> Result<Element, RenderError> {
                    Ok(Element::text(format!("{label}: {error}")))
                },
            );
        }
        if let Some(options) = self.options.clone() {
            exports = exports.with_screen_options(OptionsSource::Static(options));
        }
        exports
    }

    fn load(&self) -> ModuleLoad {
        if let Some(reason) = &self.load_error {
            return ModuleLoad::Failed(LoadError::Failed(reason.clone()));
        }

        let exports = self.exports();
        if self.asynchronous {
            ModuleLoad::pending(futures::future::ready(Ok(exports)))
        } else {
            ModuleLoad::Ready(exports)
        }
    }
}

impl RouteManifest {
    /// Builds the route tree, children before parents.
    pub fn build(&self) -> Result<RouteNodeRef, ManifestError> {
        let mut context_keys = HashSet::new();
        self.build_node(&mut context_keys, true)
    }

    // Only the root layout may use the empty segment name.
    fn build_node(
        &self,
        context_keys: &mut HashSet<String>,
        is_root: bool,
    ) -> Result<RouteNodeRef, ManifestError> {
        if self.name.is_empty() && !is_root {
            return Err(ManifestError::Invalid(format!(
                "route at {} has an empty name",
                self.context_key
            )));
        }
        if !context_keys.insert(self.context_key.clone()) {
            return Err(ManifestError::Invalid(format!(
                "context key {} is declared twice",
                self.context_key
            )));
        }

        let children = self
            .children
            .iter()
            .map(|child| child.build_node(context_keys, false))
            .collect::<Result<Vec<_>, _>>()?;

        let module = self.module.clone();
        let mut builder = RouteNode::builder(&self.name, &self.context_key, move || module.load())
            .children(children)
            .dynamic(self.dynamic.clone())
            .generated(self.generated);
        if let Some(initial_route_name) = &self.initial_route_name {
            builder = builder.initial_route_name(initial_route_name);
        }
        Ok(builder.build())
    }
}

/// Parses a JSON5 manifest document into a route tree.
pub fn parse_manifest(data: &str) -> Result<RouteNodeRef, ManifestError> {
    let manifest: RouteManifest =
        json5::from_str(data).map_err(|e| ManifestError::Parse(e.to_string()))?;
    manifest.build()
}

pub struct RouteManifestStaticFile {
    static_file: String,
}

impl RouteManifestStaticFile {
    pub fn new(static_file: String) -> Self {
        RouteManifestStaticFile { static_file }
    }

    /// Reads and builds the manifest's route tree.
    pub fn load(&self) -> Result<RouteNodeRef, ManifestError> {
        let manifest_file = canonicalize(PathBuf::from(&self.static_file))
            .map_err(|e| ManifestError::NotFound(format!("{}: {e}", self.static_file)))?;
        debug!(
            event = events::MANIFEST_FILE_RESOLVED,
            component = COMPONENT,
            manifest_file = %manifest_file.display(),
            "resolved route manifest file"
        );

        let data = fs::read_to_string(&manifest_file)
            .map_err(|e| ManifestError::Read(format!("{}: {e}", manifest_file.display())))?;

        let root = parse_manifest(&data)?;
        debug!(
            event = events::MANIFEST_LOADED,
            component = COMPONENT,
            root = %root.context_key,
            children = root.children.len(),
            "loaded route manifest"
        );
        Ok(root)
    }
}
