//! Campaign spec document model

use campaign_env::Environment;
use campaign_override::{BoolOrString, OnlyExcept, OverridableString, Published};
use serde::{Deserialize, Serialize};

/// JSON Schema every campaign spec is validated against.
pub const SCHEMA: &str = include_str!("campaign.schema.json");

/// A campaign spec as written by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changeset_template: Option<ChangesetTemplate>,
}

/// A single command run inside a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub run: String,
    pub container: String,

    #[serde(default, skip_serializing_if = "Environment::is_empty")]
    pub env: Environment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangesetTemplate {
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    pub branch: OverridableString,

    #[serde(default)]
    pub published: Published,

    #[serde(default)]
    pub draft: OnlyExcept,
}

impl ChangesetTemplate {
    /// The template values that apply to the repository `repo`.
    pub fn resolve(&self, repo: &str) -> ResolvedTemplate {
        let resolved = ResolvedTemplate {
            repo: repo.to_string(),
            title: self.title.clone(),
            body: self.body.clone(),
            branch: self.branch.value(repo).to_string(),
            published: self.published.value(repo),
            draft: self.draft.is(repo),
        };
        tracing::debug!(
            repo,
            branch = %resolved.branch,
            published = %resolved.published,
            draft = resolved.draft,
            "Resolved changeset template"
        );
        resolved
    }
}

/// Changeset template values for one repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTemplate {
    pub repo: String,
    pub title: String,
    pub body: String,
    pub branch: String,
    pub published: BoolOrString,
    pub draft: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template() -> ChangesetTemplate {
        serde_json::from_value(serde_json::json!({
            "title": "Update dependencies",
            "branch": {
                "default": "campaign/deps",
                "except": [{"github.com/sourcegraph/*": "sg/deps"}]
            },
            "published": [
                {"*": false},
                {"github.com/sourcegraph/*": "draft"},
                {"github.com/sourcegraph/src-cli": true}
            ],
            "draft": {"except": ["github.com/sourcegraph/*"]}
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_matching_repo() {
        let resolved = template().resolve("github.com/sourcegraph/src-cli");
        assert_eq!(resolved.branch, "sg/deps");
        assert_eq!(resolved.published, BoolOrString::Bool(true));
        assert!(!resolved.draft);
    }

    #[test]
    fn test_resolve_unmatched_repo() {
        let resolved = template().resolve("github.com/other/repo");
        assert_eq!(resolved.branch, "campaign/deps");
        assert_eq!(resolved.published, BoolOrString::Bool(false));
        assert!(resolved.draft);
    }

    #[test]
    fn test_resolve_string_published() {
        let resolved = template().resolve("github.com/sourcegraph/sourcegraph");
        assert_eq!(resolved.published, BoolOrString::from("draft"));
    }

    #[test]
    fn test_template_defaults() {
        let template: ChangesetTemplate = serde_json::from_value(serde_json::json!({
            "title": "t",
            "branch": "b"
        }))
        .unwrap();
        let resolved = template.resolve("any");
        assert_eq!(resolved.published, BoolOrString::Bool(false));
        assert!(!resolved.draft);
        assert_eq!(resolved.body, "");
    }

    #[test]
    fn test_schema_is_valid_json() {
        let _: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();
    }
}
