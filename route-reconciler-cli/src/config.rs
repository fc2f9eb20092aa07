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

use route_reconciler::{
    OptionsSource, OrderEntry, ReconcilerConfig, Redirect, RouteParams, ScreenOptions,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) reconciler_config: ReconcilerConfig,
    pub(crate) manifest: ManifestConfig,
    #[serde(default)]
    pub(crate) order: Vec<OrderEntryConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    pub(crate) file_path: String,
}

impl ManifestConfig {
    /// `file_path`, resolved against `config_dir` when relative.
    pub(crate) fn resolve(&self, config_dir: &Path) -> PathBuf {
        let path = PathBuf::from(&self.file_path);
        if path.is_relative() {
            config_dir.join(path)
        } else {
            path
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct OrderEntryConfig {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) redirect: Option<Redirect>,
    #[serde(default)]
    pub(crate) initial_params: Option<RouteParams>,
    #[serde(default)]
    pub(crate) options: Option<ScreenOptions>,
}

impl From<&OrderEntryConfig> for OrderEntry {
    fn from(config: &OrderEntryConfig) -> Self {
        let mut entry = OrderEntry::new(&config.name);
        if let Some(redirect) = &config.redirect {
            entry = entry.with_redirect(redirect.clone());
        }
        if let Some(initial_params) = &config.initial_params {
            entry = entry.with_initial_params(initial_params.clone());
        }
        if let Some(options) = &config.options {
            entry = entry.with_options(OptionsSource::Static(options.clone()));
        }
        entry
    }
}
