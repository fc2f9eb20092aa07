//! Author-declared ordering entries and the per-screen props they carry.

use crate::identity::id_generator::GetIdFn;
use crate::identity::route_params::RouteParams;
use crate::route_node::RouteNodeRef;
use crate::screen::options::OptionsSource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Navigation event callback, keyed by event name in [`ScreenListeners`].
pub type ListenerFn = Arc<dyn Fn(&Value) + Send + Sync>;
pub type ScreenListeners = BTreeMap<String, ListenerFn>;

/// Redirect declared on an ordering entry.
///
/// Only the boolean form is honoured: a truthy flag hides the screen. Redirecting to a
/// named target is rejected during reconciliation.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum Redirect {
    Enabled(bool),
    Target(String),
}

/// One item of an author-declared ordering list.
#[derive(Clone, Default)]
pub struct OrderEntry {
    pub name: String,
    pub redirect: Option<Redirect>,
    pub initial_params: Option<RouteParams>,
    pub listeners: Option<ScreenListeners>,
    pub options: Option<OptionsSource>,
    pub get_id: Option<GetIdFn>,
}

impl OrderEntry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn with_initial_params(mut self, initial_params: RouteParams) -> Self {
        self.initial_params = Some(initial_params);
        self
    }

    pub fn with_listeners(mut self, listeners: ScreenListeners) -> Self {
        self.listeners = Some(listeners);
        self
    }

    pub fn with_options(mut self, options: OptionsSource) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_get_id<F>(mut self, get_id: F) -> Self
    where
        F: Fn(&RouteParams) -> String + Send + Sync + 'static,
    {
        self.get_id = Some(Arc::new(get_id));
        self
    }
}

impl Debug for OrderEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderEntry")
            .field("name", &self.name)
            .field("redirect", &self.redirect)
            .field("initial_params", &self.initial_params)
            .field("has_listeners", &self.listeners.is_some())
            .field("has_options", &self.options.is_some())
            .field("has_get_id", &self.get_id.is_some())
            .finish()
    }
}

/// Per-screen overrides carried from a matched [`OrderEntry`].
#[derive(Clone, Default)]
pub struct ScreenProps {
    pub initial_params: Option<RouteParams>,
    pub listeners: Option<ScreenListeners>,
    pub options: Option<OptionsSource>,
    pub get_id: Option<GetIdFn>,
}

impl From<&OrderEntry> for ScreenProps {
    fn from(entry: &OrderEntry) -> Self {
        Self {
            initial_params: entry.initial_params.clone(),
            listeners: entry.listeners.clone(),
            options: entry.options.clone(),
            get_id: entry.get_id.clone(),
        }
    }
}

/// A route in its final position, paired with its overrides.
#[derive(Clone)]
pub struct OrderedRoute {
    pub route: RouteNodeRef,
    pub props: ScreenProps,
}

impl OrderedRoute {
    pub(crate) fn unordered(route: RouteNodeRef) -> Self {
        Self {
            route,
            props: ScreenProps::default(),
        }
    }
}

impl Debug for OrderedRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedRoute")
            .field("route", &self.route.name)
            .field("has_options", &self.props.options.is_some())
            .finish_non_exhaustive()
    }
}
