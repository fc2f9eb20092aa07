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

use serde::{Deserialize, Serialize};

/// How route modules are resolved by the adapter.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Resolve and normalize the module as soon as the route is adapted.
    #[default]
    Eager,
    /// Defer resolution to the first render or preload.
    Lazy,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReconcilerConfig {
    #[serde(default)]
    pub import_mode: ImportMode,
    /// Replace modules whose default export is empty with a visible placeholder.
    /// Development builds want this, production builds accept the empty export as-is.
    #[serde(default = "default_check_empty_default_export")]
    pub check_empty_default_export: bool,
}

fn default_check_empty_default_export() -> bool {
    true
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            import_mode: ImportMode::default(),
            check_empty_default_export: default_check_empty_default_export(),
        }
    }
}

impl ReconcilerConfig {
    pub fn lazy() -> Self {
        Self {
            import_mode: ImportMode::Lazy,
            ..Default::default()
        }
    }

    pub fn production(mut self) -> Self {
        self.check_empty_default_export = false;
        self
    }
}
