//! Authorizer response scenarios.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{event, run_default};

    fn allowed_response(method_arn: &str) -> serde_json::Value {
        let ev = event(
            method_arn,
            &json!({ "X-Hook-UUID": "abc-123" }),
            "{}",
            &json!({ "HookID": "abc-123" }),
        );
        let response = run_default(&ev)
            .into_response()
            .expect("request should be allowed");
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_should_emit_gateway_policy_document() {
        let response =
            allowed_response("arn:aws:execute-api:eu-west-1:130217157771:jr7vqbm836/v1/POST/build");
        assert_eq!(
            response,
            json!({
                "principalId": "me",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "Allow",
                        "Resource": "/build"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_should_grant_root_for_short_method_arn() {
        let response = allowed_response("arn:aws:execute-api:eu-west-1:130217157771:api/v1/POST");
        assert_eq!(response["policyDocument"]["Statement"][0]["Resource"], "/");
    }

    #[test]
    fn test_should_grant_first_segment_of_nested_path() {
        let response = allowed_response(
            "arn:aws:execute-api:us-east-1:123456789012:api/prod/POST/hooks/bitbucket/team",
        );
        assert_eq!(
            response["policyDocument"]["Statement"][0]["Resource"],
            "/hooks"
        );
    }

    #[test]
    fn test_should_signal_unauthorized_on_denial() {
        let ev = event(
            "arn:aws:execute-api:eu-west-1:130217157771:jr7vqbm836/v1/POST/build",
            &json!({ "X-Hook-UUID": "abc-123" }),
            "{}",
            &json!({ "HookID": "xyz-999" }),
        );
        let err = run_default(&ev).into_response().unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
    }
}
