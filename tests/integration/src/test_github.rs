//! GitHub webhook scenarios.

#[cfg(test)]
mod tests {
    use hookgate_auth::{ComparisonMode, sign_github_payload};
    use hookgate_core::AuthorizerConfig;
    use hookgate_model::AuthorizationDecision;
    use serde_json::json;

    use crate::{METHOD_ARN, event, run_default, run_event};

    const SECRET: &str = "It's a Secret to Everybody";
    const BODY: &str = r#"{"ref":"refs/heads/main","repository":{"full_name":"octo-org/octo-repo"},"pusher":{"name":"octocat"}}"#;

    fn signed_event(secret_for_signing: &str, configured_secret: &str, body: &str) -> Vec<u8> {
        let signature = sign_github_payload(secret_for_signing, body.as_bytes()).unwrap();
        event(
            METHOD_ARN,
            &json!({ "X-Hub-Signature": signature, "X-GitHub-Event": "push" }),
            body,
            &json!({ "GithubSecret": configured_secret }),
        )
    }

    #[test]
    fn test_should_allow_correctly_signed_push() {
        let decision = run_default(&signed_event(SECRET, SECRET, BODY));
        let grant = decision.grant().expect("signed push should be allowed");
        assert_eq!(grant.resource(), "/build");
        assert_eq!(grant.action(), "execute-api:Invoke");
    }

    #[test]
    fn test_should_deny_push_signed_with_other_secret() {
        let decision = run_default(&signed_event("not-the-secret", SECRET, BODY));
        assert_eq!(decision, AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_deny_deadbeef_signature() {
        let ev = event(
            METHOD_ARN,
            &json!({ "X-Hub-Signature": "sha1=deadbeef" }),
            BODY,
            &json!({ "GithubSecret": SECRET }),
        );
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_sign_non_ascii_body_as_utf8() {
        let body = r#"{"commits":[{"message":"Füge Übersetzung hinzu ✓"}]}"#;
        let decision = run_default(&signed_event(SECRET, SECRET, body));
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_should_allow_empty_body_signature() {
        let decision = run_default(&signed_event(SECRET, SECRET, ""));
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_should_deny_when_secret_stage_variable_missing() {
        let signature = sign_github_payload(SECRET, BODY.as_bytes()).unwrap();
        let ev = event(
            METHOD_ARN,
            &json!({ "X-Hub-Signature": signature }),
            BODY,
            &json!(null),
        );
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_allow_push_signed_with_empty_secret() {
        assert!(run_default(&signed_event("", "", BODY)).is_allowed());
        assert!(!run_default(&signed_event(SECRET, "", BODY)).is_allowed());
    }

    #[test]
    fn test_should_deny_empty_secret_when_guard_enabled() {
        let config = AuthorizerConfig {
            reject_empty_secret: true,
            ..AuthorizerConfig::default()
        };
        assert_eq!(
            run_event(config, &signed_event("", "", BODY)),
            AuthorizationDecision::Denied
        );
    }

    #[test]
    fn test_should_allow_in_legacy_comparison_mode() {
        let config = AuthorizerConfig {
            comparison: ComparisonMode::Legacy,
            ..AuthorizerConfig::default()
        };
        assert!(run_event(config.clone(), &signed_event(SECRET, SECRET, BODY)).is_allowed());
        assert!(!run_event(config, &signed_event("other", SECRET, BODY)).is_allowed());
    }

    #[test]
    fn test_should_ignore_lowercase_signature_header() {
        let signature = sign_github_payload(SECRET, BODY.as_bytes()).unwrap();
        let ev = event(
            METHOD_ARN,
            &json!({ "x-hub-signature": signature }),
            BODY,
            &json!({ "GithubSecret": SECRET }),
        );
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }
}
