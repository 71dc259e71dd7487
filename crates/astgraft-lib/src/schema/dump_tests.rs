use astgraft_core::{Colors, Definition};
use indoc::indoc;

use super::*;

const FIXTURE: &str = indoc! {r#"
    {
        "nodes": {
            "Program": { "body": { "list": "Statement" } },
            "ExpressionStatement": { "expression": { "ref": "Expression" } },
            "Identifier": { "name": "string" },
            "Literal": { "value": ["string", "null"] }
        },
        "statementType": ["ExpressionStatement"],
        "expressionType": ["Identifier", "Literal"]
    }
"#};

fn compile(json: &str) -> Schema {
    let schema = Schema::resolve(Definition::from_json(json).expect("fixture should parse"));
    assert!(schema.is_valid(), "{}", schema.diagnostics().render());
    schema
}

#[test]
fn json_dump_of_a_resolved_schema() {
    let schema = compile(FIXTURE);
    let pretty = serde_json::to_string_pretty(&schema.to_json()).unwrap();
    insta::assert_snapshot!(pretty, @r#"
    {
      "nodes": {
        "Program": {
          "properties": {
            "body": {
              "listOf": [
                "ExpressionStatement"
              ]
            }
          },
          "parents": null
        },
        "ExpressionStatement": {
          "properties": {
            "expression": {
              "node": [
                "Identifier",
                "Literal"
              ]
            }
          },
          "parents": [
            "Program"
          ]
        },
        "Identifier": {
          "properties": {
            "name": "string"
          },
          "parents": [
            "ExpressionStatement"
          ]
        },
        "Literal": {
          "properties": {
            "value": {
              "oneOf": [
                "string",
                "null"
              ]
            }
          },
          "parents": [
            "ExpressionStatement"
          ]
        }
      },
      "statementType": [
        "ExpressionStatement"
      ],
      "expressionType": [
        "Identifier",
        "Literal"
      ]
    }
    "#);
}

#[test]
fn json_dump_is_deterministic() {
    let first = serde_json::to_string(&compile(FIXTURE).to_json()).unwrap();
    let second = serde_json::to_string(&compile(FIXTURE).to_json()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unresolved_markers_surface_under_unknown() {
    let definition = Definition::from_json(
        r#"{
            "nodes": {
                "Foo": {
                    "target": { "ref": "Missing" },
                    "items": { "list": "Alias" }
                }
            },
            "statementType": ["Foo"],
            "expressionType": ["Foo"]
        }"#,
    )
    .unwrap();
    let schema = Schema::resolve_with(
        definition,
        SchemaOptions {
            strictness: Strictness::Lenient,
        },
    );

    let value = schema.to_json();
    assert_eq!(
        value["nodes"]["Foo"]["properties"]["target"],
        serde_json::json!({ "node": [], "unknown": ["Missing"] })
    );
    assert_eq!(
        value["nodes"]["Foo"]["properties"]["items"],
        serde_json::json!({ "listOf": [], "unknown": ["Alias"] })
    );
}

#[test]
fn nodes_to_json_keeps_only_the_subset() {
    let schema = compile(FIXTURE);
    let expressions = schema.node("Expression").unwrap();
    let value = schema.nodes_to_json(&expressions);
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Identifier", "Literal"]);
}

#[test]
fn text_printout_collapses_groups_and_lists_parents() {
    let schema = compile(indoc! {r#"
        {
            "nodes": {
                "Program": { "body": { "list": "Statement" } },
                "ExpressionStatement": { "expression": { "ref": "Expression" } },
                "Identifier": { "name": "string" },
                "Property": {
                    "kind": { "enum": ["init", "get", "set"] },
                    "shorthand": "boolean",
                    "key": { "ref": "Identifier" }
                }
            },
            "statementType": ["ExpressionStatement"],
            "expressionType": ["Identifier", "Property"]
        }
    "#});

    let nodes: Vec<&ResolvedNode> = schema.iter().collect();
    insta::assert_snapshot!(schema.render_nodes(&nodes, Colors::OFF), @r#"
    Program
      body: Statement[]
      parents: none

    ExpressionStatement
      expression: Expression
      parents: Program

    Identifier
      name: string
      parents: ExpressionStatement | Property

    Property
      kind: "init" | "get" | "set"
      shorthand: boolean
      key: Identifier
      parents: Statement
    "#);
}

#[test]
fn text_printout_marks_unresolved_targets() {
    let definition = Definition::from_json(
        r#"{
            "nodes": {
                "Bar": {},
                "Foo": {
                    "next": { "ref": "Bar" },
                    "rest": { "list": "Missing" }
                }
            },
            "statementType": ["Bar", "Foo"],
            "expressionType": ["Foo"]
        }"#,
    )
    .unwrap();
    let schema = Schema::resolve_with(
        definition,
        SchemaOptions {
            strictness: Strictness::Lenient,
        },
    );

    let nodes: Vec<&ResolvedNode> = vec![schema.get("Foo").unwrap()];
    insta::assert_snapshot!(schema.render_nodes(&nodes, Colors::OFF), @r"
    Foo
      next: Bar
      rest: unknown<Missing>[]
      parents: none
    ");
}

#[test]
fn text_printout_colors_node_names() {
    let schema = compile(FIXTURE);
    let nodes: Vec<&ResolvedNode> = vec![schema.get("Program").unwrap()];
    let rendered = schema.render_nodes(&nodes, Colors::ON);
    assert!(rendered.contains("\x1b[34mProgram\x1b[0m"));
    assert!(rendered.contains("\x1b[2mparents:\x1b[0m"));
}

#[test]
fn empty_group_renders_as_never() {
    // Missing statementType is a validation error, but the dump still works
    let definition = Definition::from_json(
        r#"{
            "nodes": { "Foo": { "next": { "ref": "Statement" } } },
            "expressionType": ["Foo"]
        }"#,
    )
    .unwrap();
    let schema = Schema::resolve(definition);
    assert!(!schema.is_valid());

    let nodes: Vec<&ResolvedNode> = vec![schema.get("Foo").unwrap()];
    insta::assert_snapshot!(schema.render_nodes(&nodes, Colors::OFF), @r"
    Foo
      next: never
      parents: none
    ");
}
