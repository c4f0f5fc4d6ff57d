use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Redact sensitive values in a string. Replaces known credential patterns
/// with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_credential_literal() {
        assert_eq!(resolve_credential("plain-key"), "plain-key");
    }

    #[test]
    fn test_resolve_credential_env() {
        std::env::set_var("CG_TEST_CRED", "from-env");
        assert_eq!(resolve_credential("$CG_TEST_CRED"), "from-env");
        std::env::remove_var("CG_TEST_CRED");
    }

    #[test]
    fn test_resolve_credential_missing_env_keeps_literal() {
        assert_eq!(resolve_credential("$CG_DEFINITELY_UNSET"), "$CG_DEFINITELY_UNSET");
    }

    #[test]
    fn test_redact_credentials() {
        let out = redact_credentials("key=supersecret123", &["supersecret123"]);
        assert_eq!(out, "key=[REDACTED]");
    }

    #[test]
    fn test_redact_skips_short_secrets() {
        let out = redact_credentials("key=abc", &["abc"]);
        assert_eq!(out, "key=abc");
    }
}
