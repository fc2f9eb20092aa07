//! Total ordering over sibling routes.

use crate::route_node::RouteNode;
use std::cmp::Ordering;

const INDEX_ROUTE_NAME: &str = "index";

/// Default sibling order.
///
/// Static routes sort before dynamic ones, single-segment captures before catch-alls,
/// and the `index` route before every other static sibling. Remaining ties break on
/// `name` and finally on `context_key`, which is unique per node, so no two distinct
/// nodes compare equal.
pub fn sort_routes(a: &RouteNode, b: &RouteNode) -> Ordering {
    a.is_dynamic()
        .cmp(&b.is_dynamic())
        .then_with(|| a.is_catch_all().cmp(&b.is_catch_all()))
        .then_with(|| {
            let a_index = a.name == INDEX_ROUTE_NAME;
            let b_index = b.name == INDEX_ROUTE_NAME;
            b_index.cmp(&a_index)
        })
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.context_key.cmp(&b.context_key))
}

/// [`sort_routes`], with the route named `initial_route_name` pinned first.
pub fn sort_routes_with_initial(
    initial_route_name: Option<&str>,
) -> impl Fn(&RouteNode, &RouteNode) -> Ordering + '_ {
    move |a, b| {
        if let Some(initial) = initial_route_name {
            match (a.name == initial, b.name == initial) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
        sort_routes(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_routes, sort_routes_with_initial};
    use crate::adapter::module_exports::{ModuleExports, ModuleLoad};
    use crate::route_node::{DynamicSegment, RouteNode, RouteNodeRef};
    use std::cmp::Ordering;

    fn node(name: &str, dynamic: Vec<DynamicSegment>) -> RouteNodeRef {
        RouteNode::builder(name, &format!("./{name}.tsx"), || {
            ModuleLoad::Ready(ModuleExports::empty_default())
        })
        .dynamic(dynamic)
        .build()
    }

    fn sorted_names(mut nodes: Vec<RouteNodeRef>, initial: Option<&str>) -> Vec<String> {
        let compare = sort_routes_with_initial(initial);
        nodes.sort_by(|a, b| compare(a, b));
        nodes.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn static_index_dynamic_and_catch_all_are_tiered() {
        let nodes = vec![
            node("[...rest]", vec![DynamicSegment::catch_all("rest")]),
            node("[id]", vec![DynamicSegment::new("id")]),
            node("settings", vec![]),
            node("index", vec![]),
            node("about", vec![]),
        ];

        assert_eq!(
            sorted_names(nodes, None),
            vec!["index", "about", "settings", "[id]", "[...rest]"]
        );
    }

    #[test]
    fn initial_route_is_pinned_first() {
        let nodes = vec![
            node("index", vec![]),
            node("about", vec![]),
            node("[id]", vec![DynamicSegment::new("id")]),
        ];

        assert_eq!(
            sorted_names(nodes, Some("[id]")),
            vec!["[id]", "index", "about"]
        );
    }

    #[test]
    fn unknown_initial_route_leaves_default_order() {
        let nodes = vec![node("b", vec![]), node("a", vec![])];

        assert_eq!(sorted_names(nodes, Some("missing")), vec!["a", "b"]);
    }

    #[test]
    fn comparator_is_antisymmetric_and_reflexive() {
        let a = node("a", vec![]);
        let b = node("b", vec![]);
        let compare = sort_routes_with_initial(Some("b"));

        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&b, &b), Ordering::Equal);
        assert_eq!(sort_routes(&a, &a), Ordering::Equal);
    }

    #[test]
    fn identical_names_break_ties_on_context_key() {
        let first = RouteNode::builder("dup", "./(a)/dup.tsx", || {
            ModuleLoad::Ready(ModuleExports::empty_default())
        })
        .build();
        let second = RouteNode::builder("dup", "./(b)/dup.tsx", || {
            ModuleLoad::Ready(ModuleExports::empty_default())
        })
        .build();

        assert_eq!(sort_routes(&first, &second), Ordering::Less);
        assert_eq!(sort_routes(&second, &first), Ordering::Greater);
    }
}
