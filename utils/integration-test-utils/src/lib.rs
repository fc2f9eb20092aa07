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

mod integration_test_logging;
pub use integration_test_logging::{capture_logs, init_logging};
mod integration_test_components;
pub use integration_test_components::{failing, labelled, segment_echo, text_boundary};
mod integration_test_routes;
pub use integration_test_routes::{
    counting_route, deferred_route, ready_route, tabs_layout, DeferredModule, LoadCounter,
};
