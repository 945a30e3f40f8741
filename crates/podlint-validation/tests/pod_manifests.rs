use podlint_validation::{lint_str, ValidationError, ValidationErrorKind};

fn located(errors: &[ValidationError]) -> Vec<(Option<usize>, String)> {
    errors.iter().map(|e| (e.line, e.message())).collect()
}

/// A manifest exercising every optional block of the schema.
#[test]
fn test_full_manifest_is_valid() {
    let content = r#"apiVersion: v1
kind: Pod
metadata:
  name: web-frontend
  namespace: production
  labels:
    app: web
    tier: frontend
spec:
  os: linux
  containers:
    - name: web_server
      image: registry.bigbrother.io/web/server:2.4.1
      ports:
        - containerPort: 8080
          protocol: TCP
        - containerPort: 9090
      readinessProbe:
        httpGet:
          path: /ready
          port: 8080
      livenessProbe:
        httpGet:
          path: /healthz
          port: 8080
      resources:
        limits:
          cpu: 2
          memory: 1Gi
        requests:
          cpu: 1
          memory: 512Mi
    - name: sidecar
      image: registry.bigbrother.io/proxy:v1
      resources: {}
"#;

    let errors = lint_str(content, "pod.yaml").unwrap();
    assert!(errors.is_empty(), "unexpected errors: {:?}", located(&errors));
}

#[test]
fn test_quoted_keys_match_fields() {
    let content = r#""apiVersion": v1
'kind': Pod
metadata: {name: web}
spec:
  containers:
    - {name: app, image: "registry.bigbrother.io/app:1", resources: {}}
"#;
    assert!(lint_str(content, "pod.yaml").unwrap().is_empty());
}

/// Problems at several depths are all reported, in check order.
#[test]
fn test_errors_across_levels() {
    let content = r#"apiVersion: v2
kind: Pod
metadata:
  name: web
spec:
  os: macos
  containers:
    - name: Web
      image: registry.bigbrother.io/web
      ports:
        - containerPort: "80"
      readinessProbe:
        httpGet:
          path: /ready
      resources:
        limits:
          memory: 512
"#;

    let errors = lint_str(content, "pod.yaml").unwrap();
    assert_eq!(
        located(&errors),
        [
            (Some(1), "apiVersion has unsupported value 'v2'".to_string()),
            (Some(6), "os has unsupported value 'macos'".to_string()),
            (Some(8), "name has invalid format 'Web'".to_string()),
            (
                Some(9),
                "image has invalid format 'registry.bigbrother.io/web'".to_string()
            ),
            (Some(11), "containerPort must be int".to_string()),
            (None, "port is required".to_string()),
            (Some(17), "memory must be string".to_string()),
        ]
    );
}

#[test]
fn test_duplicate_keys_first_wins() {
    let content = r#"apiVersion: v1
apiVersion: v9
kind: Pod
metadata:
  name: web
spec:
  containers: []
"#;
    assert!(lint_str(content, "pod.yaml").unwrap().is_empty());
}

#[test]
fn test_alias_is_not_a_string() {
    let content = r#"apiVersion: &version v1
kind: Pod
metadata:
  name: *version
spec:
  containers: []
"#;
    let errors = lint_str(content, "pod.yaml").unwrap();
    assert_eq!(located(&errors), [(Some(4), "name must be string".to_string())]);
}

#[test]
fn test_explicit_tags_decide_type() {
    let content = r#"apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: app
      image: registry.bigbrother.io/app:1
      ports:
        - containerPort: !!str 8080
        - containerPort: !!int "8081"
      resources: {}
"#;
    let errors = lint_str(content, "pod.yaml").unwrap();
    assert_eq!(located(&errors), [(Some(10), "containerPort must be int".to_string())]);
}

#[test]
fn test_null_values_are_type_errors() {
    let content = "apiVersion:\nkind: ~\nmetadata:\nspec:\n";
    let errors = lint_str(content, "pod.yaml").unwrap();
    let kinds: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(kinds, ["P-1-11", "P-1-11", "P-1-11", "P-1-11"]);
    assert_eq!(errors[0].message(), "apiVersion must be string");
    assert_eq!(errors[3].message(), "spec must be object");
}

#[test]
fn test_parse_error_is_not_a_diagnostic() {
    assert!(lint_str("metadata: {name: web\n", "pod.yaml").is_err());
}

#[test]
fn test_error_kind_serializes_with_type_tag() {
    let errors = lint_str("kind: Job\n", "pod.yaml").unwrap();
    let kind = errors
        .iter()
        .find(|e| matches!(e.kind, ValidationErrorKind::UnsupportedValue { .. }))
        .unwrap();
    let json = serde_json::to_value(&kind.kind).unwrap();
    assert_eq!(json["type"], "UnsupportedValue");
    assert_eq!(json["data"]["field"], "kind");
    assert_eq!(json["data"]["value"], "Job");
}
