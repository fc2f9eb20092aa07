//! Identity layer.
//!
//! Derives the per-instance screen identifier from a route's dynamic segments and the
//! runtime parameter bag. Identifiers are pure functions of `(route, params)`.

pub(crate) mod id_generator;
pub(crate) mod route_params;
