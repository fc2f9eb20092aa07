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

use route_reconciler::{Element, ErrorBoundary, Props, RenderContext, RenderError, SEGMENT_PROP};

/// Component rendering a fixed text.
pub fn labelled(
    label: &str,
) -> impl Fn(&Props, &RenderContext) -> Result<Element, RenderError> + Send + Sync + 'static {
    let label = label.to_string();
    move |_: &Props, _: &RenderContext| -> Result<Element, RenderError> {
        Ok(Element::text(label.clone()))
    }
}

/// Component that always fails with `message`.
pub fn failing(
    message: &str,
) -> impl Fn(&Props, &RenderContext) -> Result<Element, RenderError> + Send + Sync + 'static {
    let message = message.to_string();
    move |_: &Props, _: &RenderContext| -> Result<Element, RenderError> {
        Err(RenderError::component(message.clone()))
    }
}

/// Renders `<segment>@<nearest route context key>` plus the sorted prop names.
pub fn segment_echo(props: &Props, context: &RenderContext) -> Result<Element, RenderError> {
    let segment = props
        .get(SEGMENT_PROP)
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let context_key = context
        .route_node()
        .map(|route| route.context_key.as_str())
        .unwrap_or_default();
    let mut keys: Vec<&str> = props.keys().map(String::as_str).collect();
    keys.sort_unstable();

    Ok(Element::text(format!(
        "{segment}@{context_key} [{}]",
        keys.join(",")
    )))
}

/// Error boundary rendering `caught: <error>`.
pub fn text_boundary() -> impl ErrorBoundary + 'static {
    |error: &RenderError, _: &Props, _: &RenderContext| -> Result<Element, RenderError> {
        Ok(Element::text(format!("caught: {error}")))
    }
}
