mod kind;
pub use kind::ObjectKind;

mod descriptor;
pub use descriptor::{
    Affinity, ContainerSpec, RestartPolicy, Volume, VolumeMount, WeightedAffinityTerm,
    WorkloadDescriptor,
};

mod handle;
pub use handle::WorkloadHandle;

mod artifact;
pub use artifact::{ArtifactBundle, BundleRef};
