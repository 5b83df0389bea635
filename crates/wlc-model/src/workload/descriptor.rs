use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Env, Labels, ResourceSpec,
    error::{ModelError, ModelResult},
};

/// Declarative description of a workload submitted to the orchestrator.
///
/// `WorkloadDescriptor` is what the controller hands to `create_workload`:
/// - identity (`name`, `labels`) used for later label-based lookup;
/// - a single container with its image, args, env, mounts and resources;
/// - volumes backed by artifact bundles;
/// - an optional scheduling preference (`affinity`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadDescriptor {
    /// Derived, orchestrator-safe workload name.
    pub name: String,
    /// Identity labels (`owner`, `unit-name`, `unit-version`, ...).
    pub labels: Labels,
    /// What happens when the container exits.
    #[serde(default)]
    pub restart_policy: RestartPolicy,
    /// The one container the workload runs.
    pub container: ContainerSpec,
    /// Volumes referenced by `container.mounts`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    /// Soft scheduling preference; never a hard constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
}

/// Container part of a [`WorkloadDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub name: String,
    /// Image reference, `<namespace>/<prefix>-<unit>:<version>`.
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Env::is_empty")]
    pub env: Env,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<VolumeMount>,
    #[serde(default)]
    pub resources: ResourceSpec,
}

/// Mount of a named volume into the container filesystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    pub volume: String,
    pub mount_path: String,
}

/// Volume backed by an artifact bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub name: String,
    /// Name of the artifact bundle providing the files.
    pub bundle: String,
}

/// Scheduling preferences for a workload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affinity {
    /// Preferred (not required) co-location terms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred: Vec<WeightedAffinityTerm>,
}

/// Weighted co-location preference: schedule near objects matching `selector`
/// within the same `topology_key` domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAffinityTerm {
    /// Preference weight in `1..=100`.
    pub weight: i32,
    pub selector: Labels,
    pub topology_key: String,
}

/// Restart behaviour of a workload.
///
/// Units are short-lived; the hosting process reschedules them itself, so `Never` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RestartPolicy {
    #[default]
    Never,
    OnFailure,
    Always,
}

impl FromStr for RestartPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" | "" => Ok(RestartPolicy::Never),
            "on-failure" | "onfailure" => Ok(RestartPolicy::OnFailure),
            "always" => Ok(RestartPolicy::Always),
            other => Err(ModelError::UnknownRestartPolicy(other.to_string())),
        }
    }
}

impl WorkloadDescriptor {
    /// Name of the first artifact bundle mounted into the workload, if any.
    pub fn bundle_name(&self) -> Option<&str> {
        self.volumes.first().map(|v| v.bundle.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_policy_parses_aliases() {
        assert_eq!("".parse::<RestartPolicy>().unwrap(), RestartPolicy::Never);
        assert_eq!(
            "On-Failure".parse::<RestartPolicy>().unwrap(),
            RestartPolicy::OnFailure
        );
        assert!("sometimes".parse::<RestartPolicy>().is_err());
    }

    #[test]
    fn serde_omits_empty_sections() {
        let desc = WorkloadDescriptor {
            name: "unit-cc".into(),
            labels: Labels::new(),
            restart_policy: RestartPolicy::Never,
            container: ContainerSpec {
                name: "unit-cc".into(),
                image: "ns/unit-cc:1.0".into(),
                args: Vec::new(),
                env: Env::new(),
                mounts: Vec::new(),
                resources: ResourceSpec::default(),
            },
            volumes: Vec::new(),
            affinity: None,
        };

        let json = serde_json::to_string(&desc).unwrap();
        assert!(!json.contains("volumes"));
        assert!(!json.contains("affinity"));
        assert!(json.contains("\"restartPolicy\":\"never\""));

        let back: WorkloadDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
        assert!(back.bundle_name().is_none());
    }
}
