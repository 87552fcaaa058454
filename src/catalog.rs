//! The declared feature flags.
//!
//! One declaration and one accessor per manifest record, in manifest order,
//! followed by the registry of all of them. Call sites use the accessors; tooling
//! that only has a key goes through [`registry`].
//!
//! Every declaration and the registry are built together on first use of any
//! accessor, so a flag is never readable before the whole catalog has been
//! validated.

use once_cell::sync::Lazy;

use crate::Lifecycle::{Permanent, Temporary};
use crate::{BoolFlag, IntFlag, Registry, make_bool_flag, make_int_flag};

struct Catalog {
    app_metrics: BoolFlag,
    backend_example: BoolFlag,
    community_templates: BoolFlag,
    frontend_example: IntFlag,
    group_window_aggregate_transpose: BoolFlag,
    new_label_package: BoolFlag,
    memory_optimized_fill: BoolFlag,
    memory_optimized_schema_mutation: BoolFlag,
    query_tracing: BoolFlag,
    band_plot_type: BoolFlag,
    mosaic_graph_type: BoolFlag,
    notebooks: BoolFlag,
    inject_latest_success_time: BoolFlag,
    enforce_organization_dashboard_limits: BoolFlag,
    time_filter_flags: BoolFlag,
    registry: Registry,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let app_metrics = make_bool_flag(
        "App Metrics",
        "appMetrics",
        "Bucky, Monitoring Team",
        false,
        Permanent,
        true,
    );
    let backend_example = make_bool_flag(
        "Backend Example",
        "backendExample",
        "Gavin Cabbage",
        false,
        Permanent,
        false,
    );
    let community_templates = make_bool_flag(
        "Community Templates",
        "communityTemplates",
        "Bucky",
        true,
        Permanent,
        true,
    );
    let frontend_example = make_int_flag(
        "Frontend Example",
        "frontendExample",
        "Gavin Cabbage",
        42,
        Temporary,
        true,
    );
    let group_window_aggregate_transpose = make_bool_flag(
        "Group Window Aggregate Transpose",
        "groupWindowAggregateTranspose",
        "Query Team",
        false,
        Temporary,
        false,
    );
    let new_label_package = make_bool_flag(
        "New Label Package",
        "newLabels",
        "Alirie Gray",
        false,
        Temporary,
        false,
    );
    let memory_optimized_fill = make_bool_flag(
        "Memory Optimized Fill",
        "memoryOptimizedFill",
        "Query Team",
        false,
        Temporary,
        false,
    );
    let memory_optimized_schema_mutation = make_bool_flag(
        "Memory Optimized Schema Mutation",
        "memoryOptimizedSchemaMutation",
        "Query Team",
        false,
        Temporary,
        false,
    );
    let query_tracing = make_bool_flag(
        "Query Tracing",
        "queryTracing",
        "Query Team",
        false,
        Permanent,
        false,
    );
    let band_plot_type = make_bool_flag(
        "Band Plot Type",
        "bandPlotType",
        "Monitoring Team",
        false,
        Temporary,
        true,
    );
    let mosaic_graph_type = make_bool_flag(
        "Mosaic Graph Type",
        "mosaicGraphType",
        "Monitoring Team",
        false,
        Temporary,
        true,
    );
    let notebooks = make_bool_flag(
        "Notebooks",
        "notebooks",
        "Monitoring Team",
        false,
        Temporary,
        true,
    );
    let inject_latest_success_time = make_bool_flag(
        "Inject Latest Success Time",
        "injectLatestSuccessTime",
        "Compute Team",
        false,
        Temporary,
        false,
    );
    let enforce_organization_dashboard_limits = make_bool_flag(
        "Enforce Organization Dashboard Limits",
        "enforceOrgDashboardLimits",
        "Compute Team",
        false,
        Temporary,
        false,
    );
    let time_filter_flags = make_bool_flag(
        "Time Filter Flags",
        "timeFilterFlags",
        "Compute Team",
        false,
        Temporary,
        true,
    );

    let registry = crate::registry![
        &app_metrics,
        &backend_example,
        &community_templates,
        &frontend_example,
        &group_window_aggregate_transpose,
        &new_label_package,
        &memory_optimized_fill,
        &memory_optimized_schema_mutation,
        &query_tracing,
        &band_plot_type,
        &mosaic_graph_type,
        &notebooks,
        &inject_latest_success_time,
        &enforce_organization_dashboard_limits,
        &time_filter_flags,
    ];

    Catalog {
        app_metrics,
        backend_example,
        community_templates,
        frontend_example,
        group_window_aggregate_transpose,
        new_label_package,
        memory_optimized_fill,
        memory_optimized_schema_mutation,
        query_tracing,
        band_plot_type,
        mosaic_graph_type,
        notebooks,
        inject_latest_success_time,
        enforce_organization_dashboard_limits,
        time_filter_flags,
        registry,
    }
});

/// Send UI telemetry to the Tools cluster. Should always be false in OSS.
pub fn app_metrics() -> &'static BoolFlag {
    &CATALOG.app_metrics
}

/// A permanent backend example boolean flag.
pub fn backend_example() -> &'static BoolFlag {
    &CATALOG.backend_example
}

/// Replace the current template uploading functionality with community driven templates.
pub fn community_templates() -> &'static BoolFlag {
    &CATALOG.community_templates
}

/// A temporary frontend example integer flag.
pub fn frontend_example() -> &'static IntFlag {
    &CATALOG.frontend_example
}

/// Enables the GroupWindowAggregateTransposeRule for all enabled window aggregates.
pub fn group_window_aggregate_transpose() -> &'static BoolFlag {
    &CATALOG.group_window_aggregate_transpose
}

/// Enables the refactored labels API.
pub fn new_label_package() -> &'static BoolFlag {
    &CATALOG.new_label_package
}

/// Enable the memory optimized `fill()`.
pub fn memory_optimized_fill() -> &'static BoolFlag {
    &CATALOG.memory_optimized_fill
}

/// Enable the memory optimized schema mutation functions.
pub fn memory_optimized_schema_mutation() -> &'static BoolFlag {
    &CATALOG.memory_optimized_schema_mutation
}

/// Turn on query tracing for queries that are sampled.
pub fn query_tracing() -> &'static BoolFlag {
    &CATALOG.query_tracing
}

/// Enables the creation of a band plot in Dashboards.
pub fn band_plot_type() -> &'static BoolFlag {
    &CATALOG.band_plot_type
}

/// Enables the creation of a mosaic graph in Dashboards.
pub fn mosaic_graph_type() -> &'static BoolFlag {
    &CATALOG.mosaic_graph_type
}

/// Determine if the notebook feature's route and navbar icon are visible to the user.
pub fn notebooks() -> &'static BoolFlag {
    &CATALOG.notebooks
}

/// Inject the latest successful task run timestamp into a Task query extern when executing.
pub fn inject_latest_success_time() -> &'static BoolFlag {
    &CATALOG.inject_latest_success_time
}

/// Enforces the default limit params for the dashboards API when orgs are set.
pub fn enforce_organization_dashboard_limits() -> &'static BoolFlag {
    &CATALOG.enforce_organization_dashboard_limits
}

/// Filter the task run list based on before and after flags.
pub fn time_filter_flags() -> &'static BoolFlag {
    &CATALOG.time_filter_flags
}

/// Every declared flag, in manifest order.
pub fn registry() -> &'static Registry {
    &CATALOG.registry
}

/// Build the catalog now, so a malformed or duplicate declaration stops the
/// process at startup rather than at the first flag read.
pub fn init() -> &'static Registry {
    let registry = registry();

    tracing::debug!(
        flags = registry.len(),
        temporary = ?registry.temporary().map(|flag| flag.key()).collect::<Vec<_>>(),
        "Feature flags initialized"
    );

    registry
}
