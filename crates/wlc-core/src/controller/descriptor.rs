//! Assembly of the workload descriptor submitted on start.
use tracing::warn;
use wlc_model::{
    Affinity, ContainerSpec, Env, LABEL_BUNDLE, LABEL_OWNER, LABEL_SERVICE, LABEL_UNIT_NAME,
    LABEL_UNIT_VERSION, LABEL_WORKLOAD, Labels, ResourceSpec, RestartPolicy,
    SERVICE_UNIT_WORKLOAD, UnitDescriptor, Volume, VolumeMount, WeightedAffinityTerm,
    WorkloadDescriptor,
};

use crate::{config::ControllerConfig, identity};

/// Volume name under which uploaded files are mounted.
pub const BUNDLE_VOLUME: &str = "uploaded-files";

/// Directory under which bundles without an absolute common root are mounted.
pub const BUNDLE_MOUNT_BASE: &str = "/var/lib/unit/files";

/// Weight of the same-owner co-location preference.
pub const AFFINITY_WEIGHT: i32 = 50;

/// Topology domain for co-location: the node.
pub const AFFINITY_TOPOLOGY_KEY: &str = "kubernetes.io/hostname";

/// Labels identifying every instance of `unit` run for `owner`.
///
/// This is exactly the set matched when looking instances up again.
pub fn instance_labels(owner: &str, unit: &UnitDescriptor) -> Labels {
    [
        (LABEL_OWNER, owner),
        (LABEL_UNIT_NAME, unit.name()),
        (LABEL_UNIT_VERSION, unit.version()),
    ]
    .into_iter()
    .collect()
}

/// Full label set stamped on a workload.
pub fn workload_labels(owner: &str, unit: &UnitDescriptor, name: &str) -> Labels {
    let mut labels = instance_labels(owner, unit);
    labels
        .insert(LABEL_SERVICE, SERVICE_UNIT_WORKLOAD)
        .insert(LABEL_WORKLOAD, name);
    labels
}

/// Labels of the artifact bundle belonging to workload `name`.
///
/// `LABEL_BUNDLE` is the stable key the orchestrator uses for update-if-exists.
pub fn bundle_labels(owner: &str, name: &str) -> Labels {
    [
        (LABEL_SERVICE, SERVICE_UNIT_WORKLOAD),
        (LABEL_OWNER, owner),
        (LABEL_BUNDLE, name),
    ]
    .into_iter()
    .collect()
}

/// Stored artifact bundle and the path it is mounted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleMount {
    pub bundle: String,
    pub path: String,
}

/// Everything start collected for one workload.
#[derive(Debug, Clone)]
pub struct DescriptorInput<'a> {
    pub name: &'a str,
    pub unit: &'a UnitDescriptor,
    pub args: &'a [String],
    pub env: Env,
    pub mount: Option<BundleMount>,
    pub resources: ResourceSpec,
}

/// Absolute mount path for a bundle whose files share `root`.
///
/// Absolute roots are kept. An empty or `/` root would shadow the container filesystem and a
/// relative root is not a valid mount path, so both are placed under [`BUNDLE_MOUNT_BASE`].
pub fn mount_path(root: &str) -> String {
    let relative = root.trim_start_matches('/');
    if root.starts_with('/') && !relative.is_empty() {
        root.to_string()
    } else if relative.is_empty() {
        format!("{BUNDLE_MOUNT_BASE}/")
    } else {
        format!("{BUNDLE_MOUNT_BASE}/{relative}")
    }
}

/// Build the [`WorkloadDescriptor`] for one start request.
pub fn assemble(cfg: &ControllerConfig, input: DescriptorInput<'_>) -> WorkloadDescriptor {
    let owner = cfg.owner_id.as_str();

    let (mounts, volumes) = match input.mount {
        Some(BundleMount { bundle, path }) => {
            let target = mount_path(&path);
            if target != path {
                warn!(bundle = %bundle, root = %path, mount = %target, "anchoring bundle mount");
            }
            (
                vec![VolumeMount {
                    volume: BUNDLE_VOLUME.to_string(),
                    mount_path: target,
                }],
                vec![Volume {
                    name: BUNDLE_VOLUME.to_string(),
                    bundle,
                }],
            )
        }
        None => (Vec::new(), Vec::new()),
    };

    let affinity = Affinity {
        preferred: vec![WeightedAffinityTerm {
            weight: AFFINITY_WEIGHT,
            selector: [(LABEL_OWNER, owner)].into_iter().collect(),
            topology_key: AFFINITY_TOPOLOGY_KEY.to_string(),
        }],
    };

    WorkloadDescriptor {
        name: input.name.to_string(),
        labels: workload_labels(owner, input.unit, input.name),
        restart_policy: RestartPolicy::Never,
        container: ContainerSpec {
            name: identity::container_name(&cfg.name_prefix, input.unit),
            image: identity::image_reference(&cfg.registry, input.unit),
            args: input.args.to_vec(),
            env: input.env,
            mounts,
            resources: input.resources,
        },
        volumes,
        affinity: Some(affinity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;

    fn config() -> ControllerConfig {
        ControllerConfig {
            owner_id: "peer0".into(),
            registry: RegistryConfig {
                namespace: "acme".into(),
                prefix: "unit".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn descriptor_carries_identity_and_container() {
        let unit = UnitDescriptor::new("mycc", "1.0");
        let args = vec!["serve".to_string()];
        let desc = assemble(
            &config(),
            DescriptorInput {
                name: "unit-peer0-mycc-1.0",
                unit: &unit,
                args: &args,
                env: Env::from_assignments(["A=1"]),
                mount: None,
                resources: ResourceSpec::default(),
            },
        );

        assert_eq!(desc.name, "unit-peer0-mycc-1.0");
        assert_eq!(desc.labels.get(LABEL_OWNER), Some("peer0"));
        assert_eq!(desc.labels.get(LABEL_UNIT_NAME), Some("mycc"));
        assert_eq!(desc.labels.get(LABEL_UNIT_VERSION), Some("1.0"));
        assert_eq!(desc.labels.get(LABEL_WORKLOAD), Some("unit-peer0-mycc-1.0"));
        assert_eq!(desc.restart_policy, RestartPolicy::Never);
        assert_eq!(desc.container.image, "acme/unit-mycc:1.0");
        assert_eq!(desc.container.name, "unit-mycc");
        assert_eq!(desc.container.args, args);
        assert_eq!(desc.container.env.get("A"), Some("1"));
        assert!(desc.volumes.is_empty());
        assert!(desc.container.mounts.is_empty());
    }

    #[test]
    fn affinity_is_a_soft_same_owner_preference() {
        let unit = UnitDescriptor::new("mycc", "1.0");
        let desc = assemble(
            &config(),
            DescriptorInput {
                name: "w",
                unit: &unit,
                args: &[],
                env: Env::new(),
                mount: None,
                resources: ResourceSpec::default(),
            },
        );

        let affinity = desc.affinity.expect("affinity set");
        assert_eq!(affinity.preferred.len(), 1);
        let term = &affinity.preferred[0];
        assert_eq!(term.weight, AFFINITY_WEIGHT);
        assert_eq!(term.selector.get(LABEL_OWNER), Some("peer0"));
        assert_eq!(term.topology_key, AFFINITY_TOPOLOGY_KEY);
    }

    #[test]
    fn bundle_mount_adds_volume() {
        let unit = UnitDescriptor::new("mycc", "1.0");
        let desc = assemble(
            &config(),
            DescriptorInput {
                name: "w",
                unit: &unit,
                args: &[],
                env: Env::new(),
                mount: Some(BundleMount {
                    bundle: "w".into(),
                    path: "/opt/unit/".into(),
                }),
                resources: ResourceSpec::default(),
            },
        );

        assert_eq!(desc.bundle_name(), Some("w"));
        assert_eq!(desc.container.mounts[0].mount_path, "/opt/unit/");
        assert_eq!(desc.container.mounts[0].volume, BUNDLE_VOLUME);
    }

    #[test]
    fn rootless_bundle_mounts_under_base() {
        let unit = UnitDescriptor::new("mycc", "1.0");
        let desc = assemble(
            &config(),
            DescriptorInput {
                name: "w",
                unit: &unit,
                args: &[],
                env: Env::new(),
                mount: Some(BundleMount {
                    bundle: "w".into(),
                    path: String::new(),
                }),
                resources: ResourceSpec::default(),
            },
        );

        assert_eq!(desc.container.mounts[0].mount_path, "/var/lib/unit/files/");
    }

    #[test]
    fn mount_path_never_shadows_the_filesystem_root() {
        assert_eq!(mount_path("/opt/unit/"), "/opt/unit/");
        assert_eq!(mount_path("/"), "/var/lib/unit/files/");
        assert_eq!(mount_path(""), "/var/lib/unit/files/");
        assert_eq!(mount_path("src/app/"), "/var/lib/unit/files/src/app/");
    }

    #[test]
    fn instance_selector_labels_exclude_service_and_workload() {
        let unit = UnitDescriptor::new("mycc", "1.0");
        let labels = instance_labels("peer0", &unit);

        assert_eq!(
            labels.to_selector(),
            "owner=peer0,unit-name=mycc,unit-version=1.0"
        );
    }

    #[test]
    fn bundle_labels_carry_stable_key() {
        let labels = bundle_labels("peer0", "unit-peer0-mycc-1.0");
        assert_eq!(labels.get(LABEL_BUNDLE), Some("unit-peer0-mycc-1.0"));
        assert_eq!(labels.get(LABEL_SERVICE), Some(SERVICE_UNIT_WORKLOAD));
    }
}
