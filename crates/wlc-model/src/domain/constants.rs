//! Well-known label keys attached to everything the controller creates.
//!
//! Workloads and artifact bundles are found again purely through these labels,
//! so every producer and every selector must agree on the exact strings.

/// Marks an object as managed by the unit controller.
pub const LABEL_SERVICE: &str = "service";

/// Value stored under [`LABEL_SERVICE`].
pub const SERVICE_UNIT_WORKLOAD: &str = "unit-workload";

/// Owner (hosting peer) on whose behalf the workload runs.
///
/// Also used as the soft affinity selector between workloads of one owner.
pub const LABEL_OWNER: &str = "owner";

/// Logical unit name.
pub const LABEL_UNIT_NAME: &str = "unit-name";

/// Logical unit version.
pub const LABEL_UNIT_VERSION: &str = "unit-version";

/// Derived workload name.
pub const LABEL_WORKLOAD: &str = "workload";

/// Stable key of the artifact bundle mounted into a workload.
pub const LABEL_BUNDLE: &str = "bundle";
