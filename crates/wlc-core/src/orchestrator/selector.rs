use wlc_model::Labels;

use super::OrchestratorError;

/// Parse an equality label selector (`k1=v1, k2==v2`) into the labels it requires.
///
/// Empty terms are skipped, so `""` selects everything.
pub fn parse_selector(selector: &str) -> Result<Labels, OrchestratorError> {
    let mut labels = Labels::new();

    for term in selector.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (key, value) = term
            .split_once("==")
            .or_else(|| term.split_once('='))
            .ok_or_else(|| OrchestratorError::InvalidSelector(term.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(OrchestratorError::InvalidSelector(term.to_string()));
        }
        labels.insert(key, value.trim());
    }
    Ok(labels)
}
