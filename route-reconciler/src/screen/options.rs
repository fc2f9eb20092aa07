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

//! Navigation options and how they are resolved for one screen.

use crate::identity::route_params::RouteParams;
use serde_json::{json, Map, Value};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Navigation options handed to the host runtime, keyed by option name.
pub type ScreenOptions = Map<String, Value>;

pub const TAB_BAR_BUTTON_OPTION: &str = "tabBarButton";
pub const DRAWER_ITEM_STYLE_OPTION: &str = "drawerItemStyle";

/// Arguments the host passes when it asks a screen for its options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsArgs {
    pub route_name: String,
    pub route_key: Option<String>,
    pub params: RouteParams,
}

impl OptionsArgs {
    pub fn new(route_name: &str, params: RouteParams) -> Self {
        Self {
            route_name: route_name.to_string(),
            route_key: None,
            params,
        }
    }
}

pub type OptionsFn = Arc<dyn Fn(&OptionsArgs) -> ScreenOptions + Send + Sync>;

/// Options declared either as a fixed map or as a function of the call arguments.
#[derive(Clone)]
pub enum OptionsSource {
    Static(ScreenOptions),
    Dynamic(OptionsFn),
}

impl OptionsSource {
    /// Static options from a JSON value. Anything but an object declares no options.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(options) => OptionsSource::Static(options),
            _ => OptionsSource::Static(ScreenOptions::new()),
        }
    }

    pub fn dynamic<F>(options: F) -> Self
    where
        F: Fn(&OptionsArgs) -> ScreenOptions + Send + Sync + 'static,
    {
        OptionsSource::Dynamic(Arc::new(options))
    }

    pub fn resolve(&self, args: &OptionsArgs) -> ScreenOptions {
        match self {
            OptionsSource::Static(options) => options.clone(),
            OptionsSource::Dynamic(options) => options(args),
        }
    }
}

impl Debug for OptionsSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsSource::Static(options) => f.debug_tuple("Static").field(options).finish(),
            OptionsSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Shallow merge; keys in `overrides` replace those already in `options`.
pub fn merge_options(options: &mut ScreenOptions, overrides: ScreenOptions) {
    for (key, value) in overrides {
        options.insert(key, value);
    }
}

/// Keeps a route out of tab bars and drawers.
pub fn hide_from_navigation_chrome(options: &mut ScreenOptions) {
    options.insert(TAB_BAR_BUTTON_OPTION.to_string(), Value::Null);
    options.insert(
        DRAWER_ITEM_STYLE_OPTION.to_string(),
        json!({ "height": 0, "display": "none" }),
    );
}
