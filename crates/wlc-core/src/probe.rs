//! In-cluster capability probe.
//!
//! The controller may only operate when it is enabled in configuration and the process runs inside
//! the cluster with a readable service-account token.
use std::path::Path;

use tracing::{info, warn};

use crate::config::ControllerConfig;

pub const SERVICE_HOST_ENV: &str = "KUBERNETES_SERVICE_HOST";
pub const SERVICE_PORT_ENV: &str = "KUBERNETES_SERVICE_PORT";
pub const SERVICE_ACCOUNT_TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Returns `true` if the controller can talk to the orchestrator from this process.
pub fn in_cluster(cfg: &ControllerConfig) -> bool {
    probe(
        cfg,
        |key| std::env::var(key).ok(),
        Path::new(SERVICE_ACCOUNT_TOKEN_PATH),
    )
}

/// [`in_cluster`] with injectable environment and token location.
pub fn probe<E>(cfg: &ControllerConfig, env: E, token_path: &Path) -> bool
where
    E: Fn(&str) -> Option<String>,
{
    if !cfg.enabled {
        info!("orchestrator support is disabled");
        return false;
    }

    let present = |key: &str| env(key).is_some_and(|v| !v.is_empty());
    if !present(SERVICE_HOST_ENV) || !present(SERVICE_PORT_ENV) {
        info!("orchestrator service environment variables not found");
        return false;
    }

    match std::fs::read_to_string(token_path) {
        Ok(token) if !token.trim().is_empty() => true,
        Ok(_) => {
            warn!(path = %token_path.display(), "service account token is empty");
            false
        }
        Err(e) => {
            warn!(path = %token_path.display(), error = %e, "cannot read service account token");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf};

    use super::*;

    fn enabled() -> ControllerConfig {
        ControllerConfig {
            enabled: true,
            ..Default::default()
        }
    }

    fn cluster_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (SERVICE_HOST_ENV, "10.0.0.1".to_string()),
            (SERVICE_PORT_ENV, "443".to_string()),
        ])
    }

    fn token_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wlc-probe-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn disabled_config_is_never_in_cluster() {
        let env = cluster_env();
        let token = token_file("disabled", "secret");

        let ok = probe(
            &ControllerConfig::default(),
            |k| env.get(k).cloned(),
            &token,
        );
        assert!(!ok);
        let _ = std::fs::remove_file(token);
    }

    #[test]
    fn missing_service_env_fails() {
        let mut env = cluster_env();
        env.remove(SERVICE_PORT_ENV);
        let token = token_file("noenv", "secret");

        assert!(!probe(&enabled(), |k| env.get(k).cloned(), &token));
        let _ = std::fs::remove_file(token);
    }

    #[test]
    fn unreadable_token_fails() {
        let env = cluster_env();
        let missing = std::env::temp_dir().join("wlc-probe-does-not-exist");

        assert!(!probe(&enabled(), |k| env.get(k).cloned(), &missing));
    }

    #[test]
    fn empty_token_fails() {
        let env = cluster_env();
        let token = token_file("empty", "");

        assert!(!probe(&enabled(), |k| env.get(k).cloned(), &token));
        let _ = std::fs::remove_file(token);
    }

    #[test]
    fn enabled_with_env_and_token_succeeds() {
        let env = cluster_env();
        let token = token_file("ok", "eyJhbGciOi");

        assert!(probe(&enabled(), |k| env.get(k).cloned(), &token));
        let _ = std::fs::remove_file(token);
    }
}
