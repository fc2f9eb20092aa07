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

mod config;

use crate::config::Config;
use clap::Parser;
use route_manifest_static_file::RouteManifestStaticFile;
use route_reconciler::{
    OptionsArgs, OrderEntry, Props, RenderContext, RouteParams, RouteReconciler,
};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Parser)]
#[command()]
struct ReconcilerArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
    /// Parameter bag used for identifiers and options, as a JSON5 object.
    #[arg(short, long, value_name = "JSON5")]
    params: Option<String>,
    /// Preload and render every screen.
    #[arg(short, long)]
    render: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started route-reconciler-cli");

    let args = ReconcilerArgs::parse();
    let contents = fs::read_to_string(&args.config)
        .map_err(|e| format!("Unable to read config file {}: {e}", args.config))?;
    let config: Config = json5::from_str(&contents)
        .map_err(|e| format!("Unable to parse config file {}: {e}", args.config))?;

    let params: RouteParams = match &args.params {
        Some(params) => json5::from_str(params)
            .map_err(|e| format!("Unable to parse --params: {e}"))?,
        None => RouteParams::new(),
    };

    let config_dir = Path::new(&args.config)
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let manifest_path = config.manifest.resolve(config_dir);
    let root = RouteManifestStaticFile::new(manifest_path.display().to_string()).load()?;

    let reconciler = RouteReconciler::new("route-reconciler-cli", config.reconciler_config);
    let order: Vec<OrderEntry> = config.order.iter().map(OrderEntry::from).collect();
    let order = (!order.is_empty()).then_some(order.as_slice());

    let screens = reconciler.screens(&root, order)?;
    info!("Reconciled {} screens under {}", screens.len(), root.context_key);

    for screen in &screens {
        let id = screen.id_for(&params);
        let options = screen.resolve_options(&OptionsArgs::new(&screen.name, params.clone()));
        println!(
            "{}\tid={:?}\toptions={}",
            screen.name,
            id,
            serde_json::Value::Object(options)
        );
    }

    if args.render {
        for screen in &screens {
            let component = screen.component();
            if let Err(err) = component.preload().await {
                warn!("Unable to preload {}: {err}", component.context_key());
            }
            match component.render(&Props::new(), &RenderContext::new()) {
                Ok(element) => println!("{}\t{:?}", screen.name, element.unscoped()),
                Err(err) => println!("{}\terror: {err}", screen.name),
            }
        }
    }

    Ok(())
}
