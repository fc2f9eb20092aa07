//! Explicit contract for what a route module exports and how it is loaded.

use crate::adapter::component::{Component, ComponentRef, ErrorBoundary, ErrorBoundaryRef};
use crate::error::LoadError;
use crate::screen::options::OptionsSource;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;

/// A module's default export.
#[derive(Clone)]
pub enum DefaultExport {
    Component(ComponentRef),
    /// The module exports an empty default, i.e. nothing renderable.
    Empty,
}

/// Exports of a loaded route module.
#[derive(Clone)]
pub struct ModuleExports {
    pub default: DefaultExport,
    pub error_boundary: Option<ErrorBoundaryRef>,
    /// Statically declared navigation options.
    pub screen_options: Option<OptionsSource>,
}

impl ModuleExports {
    pub fn new<C>(component: C) -> Self
    where
        C: Component + 'static,
    {
        Self::from_component(Arc::new(component))
    }

    pub fn from_component(component: ComponentRef) -> Self {
        Self {
            default: DefaultExport::Component(component),
            error_boundary: None,
            screen_options: None,
        }
    }

    pub fn empty_default() -> Self {
        Self {
            default: DefaultExport::Empty,
            error_boundary: None,
            screen_options: None,
        }
    }

    pub fn with_error_boundary<B>(mut self, error_boundary: B) -> Self
    where
        B: ErrorBoundary + 'static,
    {
        self.error_boundary = Some(Arc::new(error_boundary));
        self
    }

    pub fn with_screen_options(mut self, screen_options: OptionsSource) -> Self {
        self.screen_options = Some(screen_options);
        self
    }
}

pub type PendingModule = BoxFuture<'static, Result<ModuleExports, LoadError>>;

/// Result of invoking a route's loader: resolved now, resolving later, or failed.
pub enum ModuleLoad {
    Ready(ModuleExports),
    Pending(PendingModule),
    Failed(LoadError),
}

impl ModuleLoad {
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<ModuleExports, LoadError>> + Send + 'static,
    {
        ModuleLoad::Pending(future.boxed())
    }
}

/// Loads the implementation module of one route.
pub trait RouteLoader: Send + Sync {
    fn load_route(&self) -> ModuleLoad;
}

impl<F> RouteLoader for F
where
    F: Fn() -> ModuleLoad + Send + Sync,
{
    fn load_route(&self) -> ModuleLoad {
        self()
    }
}
