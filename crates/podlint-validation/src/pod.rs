//! The fixed Pod schema.

use crate::schema::{FieldKind, FieldSchema, IntRule, ObjectSchema, StringRule};
use once_cell::sync::Lazy;
use regex::Regex;

/// Registry all container images must come from.
pub const IMAGE_REGISTRY_PREFIX: &str = "registry.bigbrother.io/";

static SNAKE_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());

static MEMORY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:Gi|Mi|Ki)$").unwrap());

const PORT_RANGE: IntRule = IntRule::Range { min: 1, max: 65535 };

/// Lowercase letters and digits in groups joined by single underscores.
pub fn is_snake_case(value: &str) -> bool {
    SNAKE_CASE_RE.is_match(value)
}

/// `registry.bigbrother.io/<name>:<tag>` with a non-empty tag after the last colon.
pub fn is_valid_image(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(IMAGE_REGISTRY_PREFIX) else {
        return false;
    };
    match rest.rfind(':') {
        Some(colon) => !rest[colon + 1..].is_empty(),
        None => false,
    }
}

/// Whole number of Gi, Mi or Ki.
pub fn is_valid_memory(value: &str) -> bool {
    MEMORY_RE.is_match(value)
}

pub fn is_absolute_path(value: &str) -> bool {
    value.starts_with('/')
}

pub static RESOURCE_QUANTITIES: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::optional("cpu", FieldKind::Int(IntRule::Any)),
        FieldSchema::optional("memory", FieldKind::String(StringRule::Format(is_valid_memory))),
    ],
};

pub static RESOURCES: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::optional("limits", FieldKind::Object(Some(&RESOURCE_QUANTITIES))),
        FieldSchema::optional("requests", FieldKind::Object(Some(&RESOURCE_QUANTITIES))),
    ],
};

pub static HTTP_GET: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::required("path", FieldKind::String(StringRule::Format(is_absolute_path))),
        FieldSchema::required("port", FieldKind::Int(PORT_RANGE)),
    ],
};

pub static PROBE: ObjectSchema = ObjectSchema {
    fields: &[FieldSchema::required("httpGet", FieldKind::Object(Some(&HTTP_GET))).halting()],
};

pub static CONTAINER_PORT: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::required("containerPort", FieldKind::Int(PORT_RANGE)),
        FieldSchema::optional("protocol", FieldKind::String(StringRule::OneOf(&["TCP", "UDP"]))),
    ],
};

pub static CONTAINER: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::required("name", FieldKind::String(StringRule::Format(is_snake_case))),
        FieldSchema::required("image", FieldKind::String(StringRule::Format(is_valid_image))),
        FieldSchema::optional(
            "ports",
            FieldKind::Array {
                element: "port",
                items: &CONTAINER_PORT,
            },
        ),
        FieldSchema::optional("readinessProbe", FieldKind::Object(Some(&PROBE))),
        FieldSchema::optional("livenessProbe", FieldKind::Object(Some(&PROBE))),
        FieldSchema::required("resources", FieldKind::Object(Some(&RESOURCES))),
    ],
};

pub static POD_SPEC: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::optional("os", FieldKind::String(StringRule::OneOf(&["linux", "windows"]))),
        FieldSchema::required(
            "containers",
            FieldKind::Array {
                element: "container",
                items: &CONTAINER,
            },
        )
        .halting(),
    ],
};

pub static METADATA: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::required("name", FieldKind::String(StringRule::NonEmpty)),
        FieldSchema::optional("namespace", FieldKind::String(StringRule::Any)),
        FieldSchema::optional("labels", FieldKind::Object(None)),
    ],
};

/// Top level of a Pod manifest.
pub static POD: ObjectSchema = ObjectSchema {
    fields: &[
        FieldSchema::required("apiVersion", FieldKind::String(StringRule::OneOf(&["v1"]))),
        FieldSchema::required("kind", FieldKind::String(StringRule::OneOf(&["Pod"]))),
        FieldSchema::required("metadata", FieldKind::Object(Some(&METADATA))),
        FieldSchema::required("spec", FieldKind::Object(Some(&POD_SPEC))),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        for name in ["app", "my_app", "app2", "a1_b2_c3", "0"] {
            assert!(is_snake_case(name), "{name}");
        }
        for name in ["", "My-App", "my-app", "_app", "app_", "my__app", "App", "my app"] {
            assert!(!is_snake_case(name), "{name}");
        }
    }

    #[test]
    fn test_image_reference() {
        assert!(is_valid_image("registry.bigbrother.io/app:latest"));
        assert!(is_valid_image("registry.bigbrother.io/team/app:1.2.3"));
        assert!(is_valid_image("registry.bigbrother.io/app:5000:v1"));

        assert!(!is_valid_image("registry.bigbrother.io/app"));
        assert!(!is_valid_image("registry.bigbrother.io/app:"));
        assert!(!is_valid_image("docker.io/app:latest"));
        assert!(!is_valid_image("registry.bigbrother.io"));
    }

    #[test]
    fn test_memory_quantity() {
        for value in ["512Mi", "1Gi", "64Ki", "0Mi"] {
            assert!(is_valid_memory(value), "{value}");
        }
        for value in ["512", "0.5Gi", "512M", "512mi", "Mi", "512Mi ", "1Ti", "-1Gi"] {
            assert!(!is_valid_memory(value), "{value}");
        }
    }

    #[test]
    fn test_only_blocking_fields_halt() {
        assert!(POD_SPEC.field("containers").unwrap().halts_on_failure);
        assert!(PROBE.field("httpGet").unwrap().halts_on_failure);
        for schema in [&POD, &METADATA, &CONTAINER, &CONTAINER_PORT, &RESOURCES] {
            assert!(schema.fields.iter().all(|field| !field.halts_on_failure));
        }
    }

    #[test]
    fn test_top_level_field_order() {
        let names: Vec<&str> = POD.fields.iter().map(|field| field.name).collect();
        assert_eq!(names, ["apiVersion", "kind", "metadata", "spec"]);
    }
}
