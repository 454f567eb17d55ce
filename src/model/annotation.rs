use serde::{Deserialize, Serialize};

/// Explicit per-type resource configuration.
///
/// Blank `path` and `rel` mean "use the convention". `exported` defaults to
/// `true`, both for [`Default`] and when a config entry leaves it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceAnnotation {
    pub path: String,
    pub rel: String,
    pub exported: bool,
}

impl Default for ResourceAnnotation {
    fn default() -> Self {
        Self {
            path: String::new(),
            rel: String::new(),
            exported: true,
        }
    }
}

impl ResourceAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let annotation: ResourceAnnotation = serde_json::from_str(r#"{ "path": "orders" }"#).unwrap();
        assert_eq!(annotation.path, "orders");
        assert_eq!(annotation.rel, "");
        assert!(annotation.exported);
    }

    #[test]
    fn test_builder_style_setters() {
        let annotation = ResourceAnnotation::new()
            .with_rel("custom-rel")
            .with_exported(false);
        assert_eq!(annotation.path, "");
        assert_eq!(annotation.rel, "custom-rel");
        assert!(!annotation.exported);
    }
}
