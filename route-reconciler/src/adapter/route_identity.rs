//! Route identity keying used by the adapter cache.

use crate::route_node::RouteNodeRef;
use std::sync::Arc;

/// Keys a route by the address of its shared node, never by its field values.
///
/// The key does not keep the node alive. Once a node is dropped its address can be
/// handed to a new node, so entries stored under a key must confirm they still belong
/// to the node being looked up.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct RouteIdentityKey {
    address: usize,
}

impl RouteIdentityKey {
    pub(crate) fn of(route: &RouteNodeRef) -> Self {
        Self {
            address: Arc::as_ptr(route) as usize,
        }
    }
}
