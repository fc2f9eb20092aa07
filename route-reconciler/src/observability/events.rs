//! Canonical structured event names used across `route-reconciler`.

// Ordering events.
pub const ORDER_ENTRY_EXTRANEOUS: &str = "order_entry_extraneous";
pub const ORDER_ENTRY_MISSING_CHILD: &str = "order_entry_missing_child";
pub const ORDER_ENTRY_REDIRECT_REJECTED: &str = "order_entry_redirect_rejected";
pub const ORDER_ENTRY_REDIRECT_DROPPED: &str = "order_entry_redirect_dropped";

// Adapter cache and module loading events.
pub const ADAPTER_CACHE_CREATE: &str = "adapter_cache_create";
pub const ADAPTER_CACHE_REUSE: &str = "adapter_cache_reuse";
pub const ADAPTER_CACHE_RELEASE: &str = "adapter_cache_release";
pub const MODULE_LOAD_PENDING: &str = "module_load_pending";
pub const MODULE_LOAD_RESOLVED: &str = "module_load_resolved";
pub const MODULE_LOAD_FAILED: &str = "module_load_failed";
pub const EMPTY_DEFAULT_EXPORT_SUBSTITUTED: &str = "empty_default_export_substituted";
pub const ERROR_BOUNDARY_CAUGHT: &str = "error_boundary_caught";

// Reconciler facade events.
pub const RECONCILER_CREATE: &str = "reconciler_create";
pub const LAYOUT_RECONCILED: &str = "layout_reconciled";

// Route manifest events.
pub const MANIFEST_FILE_RESOLVED: &str = "manifest_file_resolved";
pub const MANIFEST_LOADED: &str = "manifest_loaded";

// Screen descriptor events.
pub const SCREEN_DESCRIPTORS_BUILT: &str = "screen_descriptors_built";
pub const SCREEN_OPTIONS_PENDING_MODULE: &str = "screen_options_pending_module";
