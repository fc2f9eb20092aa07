//! Ordering layer.
//!
//! Owns the sibling comparator and the reconciliation of author-declared ordering
//! lists against discovered children. Ordering mismatches degrade to diagnostics;
//! only a string redirect target halts reconciliation.
//!
//! ```
//! use route_reconciler::{reconcile_order, ModuleExports, ModuleLoad, OrderEntry, RouteNode};
//!
//! let child = |name: &str| {
//!     RouteNode::builder(name, &format!("./{name}.tsx"), || {
//!         ModuleLoad::Ready(ModuleExports::empty_default())
//!     })
//!     .build()
//! };
//! let children = vec![child("A"), child("B"), child("C")];
//!
//! let reconciliation =
//!     reconcile_order(&children, Some(&[OrderEntry::new("B")]), Some("C")).unwrap();
//! assert_eq!(reconciliation.route_names(), vec!["B", "C", "A"]);
//! ```

pub(crate) mod comparator;
pub(crate) mod order_entry;
pub(crate) mod order_reconciler;
