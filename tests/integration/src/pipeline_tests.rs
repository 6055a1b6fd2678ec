//! End-to-end tests across the override, env and schema crates
//!
//! Each test takes a document through the full flow: schema validation ->
//! decoding -> per-repository resolution -> re-encoding.

use campaign_env::Environment;
use campaign_override::{Bool, BoolOrString, OnlyExcept, OverridableString, Published};
use campaign_schema::{Error, Violation, unmarshal_validate};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};

const SCHEMA: &str = r#"{
    "type": "object",
    "required": ["name"],
    "properties": {
        "name": {"type": "string"},
        "env": {},
        "branch": {},
        "published": {},
        "draft": {},
        "archived": {"type": ["boolean", "array"]}
    },
    "additionalProperties": false
}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    env: Environment,
    #[serde(default)]
    branch: OverridableString,
    #[serde(default)]
    published: Published,
    #[serde(default)]
    draft: OnlyExcept,
    #[serde(default)]
    archived: Bool,
}

const DOCUMENT: &str = r#"
name: pipeline
env:
  - HOME
  - STAGE: production
branch:
  default: main
  except:
    - github.com/sourcegraph/*: sg-main
    - github.com/sourcegraph/src-cli: cli-main
published:
  - "*": false
  - github.com/sourcegraph/*: draft
  - github.com/sourcegraph/sourcegraph: true
draft:
  except:
    - github.com/sourcegraph/*
archived:
  - github.com/old/*: true
"#;

fn document() -> Document {
    unmarshal_validate(SCHEMA, DOCUMENT).unwrap()
}

#[rstest]
#[case("github.com/sourcegraph/sourcegraph", "sg-main", BoolOrString::Bool(true), false, false)]
#[case("github.com/sourcegraph/src-cli", "cli-main", BoolOrString::from("draft"), false, false)]
#[case("github.com/old/thing", "main", BoolOrString::Bool(false), true, true)]
#[case("gitlab.com/other/repo", "main", BoolOrString::Bool(false), true, false)]
fn test_resolve_per_repository(
    #[case] repo: &str,
    #[case] branch: &str,
    #[case] published: BoolOrString,
    #[case] draft: bool,
    #[case] archived: bool,
) {
    let doc = document();
    assert_eq!(doc.branch.value(repo), branch);
    assert_eq!(doc.published.value(repo), published);
    assert_eq!(doc.draft.is(repo), draft);
    assert_eq!(doc.archived.is(repo), archived);
}

#[test]
fn test_environment_resolution() {
    let doc = document();
    let resolved = doc.env.resolve(["HOME=/home/campaign", "UNRELATED=1"]).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved["HOME"], "/home/campaign");
    assert_eq!(resolved["STAGE"], "production");
    assert!(!doc.env.is_static());
}

#[test]
fn test_encoded_document_decodes_to_same_values() {
    let doc = document();
    let encoded = serde_json::to_string(&doc).unwrap();
    let decoded: Document = unmarshal_validate(SCHEMA, &encoded).unwrap();
    assert_eq!(decoded, doc);

    let encoded = serde_yaml::to_string(&doc).unwrap();
    let decoded: Document = unmarshal_validate(SCHEMA, &encoded).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn test_minimal_document_uses_zero_values() {
    let doc: Document = unmarshal_validate(SCHEMA, "name: minimal").unwrap();
    let repo = "github.com/any/repo";
    assert_eq!(doc.branch.value(repo), "");
    assert_eq!(doc.published.value(repo), BoolOrString::Bool(false));
    assert!(!doc.draft.is(repo));
    assert!(!doc.archived.is(repo));
    assert!(doc.env.is_empty());

    let encoded = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        encoded,
        serde_json::json!({
            "name": "minimal",
            "env": [],
            "branch": "",
            "published": false,
            "draft": false,
            "archived": false
        })
    );
}

#[test]
fn test_all_problems_reported_together() {
    let input = r#"
extra: field
archived: "yes"
published:
  - "github.com/[": true
"#;
    let err = unmarshal_validate::<Document>(SCHEMA, input).unwrap_err();
    let Error::Invalid(violations) = &err else {
        panic!("unexpected error {:?}", err);
    };

    let schema: Vec<String> = violations
        .iter()
        .filter_map(|v| match v {
            Violation::Schema(message) => Some(message.clone()),
            Violation::Unmarshal(_) => None,
        })
        .collect();
    // Missing name, unknown property, and archived of the wrong type.
    assert_eq!(schema.len(), 3, "{:?}", schema);
    assert!(schema.iter().any(|m| m.starts_with("/archived: ")));
    assert!(violations.iter().any(|v| matches!(v, Violation::Unmarshal(_))));
    assert!(err.to_string().contains("errors occurred"));
}

#[test]
fn test_only_except_exclusivity_surfaces_through_schema() {
    let input = "name: x\ndraft:\n  only: [a]\n  except: [b]\n";
    let err = unmarshal_validate::<Document>(SCHEMA, input).unwrap_err();
    let messages = err.messages();
    assert_eq!(messages.len(), 1, "{:?}", messages);
    assert!(messages[0].contains("only one of value, only, or except"), "{}", messages[0]);
}
