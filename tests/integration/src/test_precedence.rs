//! Trust header selection scenarios.

#[cfg(test)]
mod tests {
    use hookgate_auth::sign_github_payload;
    use hookgate_core::{AuthorizerConfig, DualHeaderPolicy};
    use hookgate_model::AuthorizationDecision;
    use serde_json::json;

    use crate::{METHOD_ARN, event, run_default, run_event};

    const SECRET: &str = "shared";
    const BODY: &str = r#"{"action":"opened"}"#;

    fn both_headers_event(signature: &str, hook_uuid: &str) -> Vec<u8> {
        event(
            METHOD_ARN,
            &json!({ "X-Hub-Signature": signature, "X-Hook-UUID": hook_uuid }),
            BODY,
            &json!({ "GithubSecret": SECRET, "HookID": "abc-123" }),
        )
    }

    #[test]
    fn test_should_deny_without_trust_headers() {
        let ev = event(
            METHOD_ARN,
            &json!({}),
            BODY,
            &json!({ "GithubSecret": SECRET, "HookID": "abc-123" }),
        );
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_deny_with_null_headers() {
        let ev = event(METHOD_ARN, &json!(null), BODY, &json!({ "HookID": "abc-123" }));
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_treat_empty_signature_header_as_absent() {
        let ev = event(
            METHOD_ARN,
            &json!({ "X-Hub-Signature": "", "X-Hook-UUID": "abc-123" }),
            BODY,
            &json!({ "HookID": "abc-123" }),
        );
        assert!(run_default(&ev).is_allowed());
    }

    #[test]
    fn test_should_reject_both_headers_by_default() {
        let signature = sign_github_payload(SECRET, BODY.as_bytes()).unwrap();
        let ev = both_headers_event(&signature, "abc-123");
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_decide_on_signature_when_preferred() {
        let config = AuthorizerConfig {
            dual_header_policy: DualHeaderPolicy::PreferSignature,
            ..AuthorizerConfig::default()
        };
        let signature = sign_github_payload(SECRET, BODY.as_bytes()).unwrap();

        // A valid signature wins even when the hook UUID is wrong.
        assert!(run_event(config.clone(), &both_headers_event(&signature, "wrong")).is_allowed());
        // A valid hook UUID cannot rescue a bad signature.
        assert!(!run_event(config, &both_headers_event("sha1=deadbeef", "abc-123")).is_allowed());
    }
}
