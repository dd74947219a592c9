//! Bitbucket webhook scenarios.

#[cfg(test)]
mod tests {
    use hookgate_model::AuthorizationDecision;
    use serde_json::json;

    use crate::{METHOD_ARN, event, hook_uuid, run_default};

    const BODY: &str = r#"{"push":{"changes":[]},"repository":{"full_name":"team/repo"}}"#;

    fn bitbucket_event(header: &str, hook_id: &str) -> Vec<u8> {
        event(
            METHOD_ARN,
            &json!({ "X-Hook-UUID": header, "X-Event-Key": "repo:push" }),
            BODY,
            &json!({ "HookID": hook_id }),
        )
    }

    #[test]
    fn test_should_allow_matching_hook_uuid() {
        let decision = run_default(&bitbucket_event("abc-123", "abc-123"));
        assert_eq!(decision.grant().map(|g| g.resource()), Some("/build"));
    }

    #[test]
    fn test_should_deny_mismatched_hook_uuid() {
        let decision = run_default(&bitbucket_event("abc-123", "xyz-999"));
        assert_eq!(decision, AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_allow_generated_hook_uuid() {
        let id = hook_uuid();
        assert!(run_default(&bitbucket_event(&id, &id)).is_allowed());
        assert!(!run_default(&bitbucket_event(&hook_uuid(), &id)).is_allowed());
    }

    #[test]
    fn test_should_deny_when_hook_id_missing() {
        let ev = event(
            METHOD_ARN,
            &json!({ "X-Hook-UUID": "abc-123" }),
            BODY,
            &json!({ "GithubSecret": "unrelated" }),
        );
        assert_eq!(run_default(&ev), AuthorizationDecision::Denied);
    }

    #[test]
    fn test_should_not_inspect_body() {
        let ev = event(
            METHOD_ARN,
            &json!({ "X-Hook-UUID": "abc-123" }),
            "definitely not json",
            &json!({ "HookID": "abc-123" }),
        );
        assert!(run_default(&ev).is_allowed());
    }
}
