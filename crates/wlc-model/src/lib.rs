mod domain;
pub use domain::{
    Env, FileBundle, KeyValue, LABEL_BUNDLE, LABEL_OWNER, LABEL_SERVICE, LABEL_UNIT_NAME,
    LABEL_UNIT_VERSION, LABEL_WORKLOAD, Labels, SERVICE_UNIT_WORKLOAD, UnitDescriptor,
};

mod error;
pub use error::{ModelError, ModelResult};

mod resource;
pub use resource::{Quantity, ResourceKind, ResourceSpec};

mod workload;
pub use workload::{
    Affinity, ArtifactBundle, BundleRef, ContainerSpec, ObjectKind, RestartPolicy, Volume,
    VolumeMount, WeightedAffinityTerm, WorkloadDescriptor, WorkloadHandle,
};
