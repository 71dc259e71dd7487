use astgraft_core::Definition;
use indoc::indoc;

use super::*;

fn compile(json: &str) -> Schema {
    Schema::resolve(Definition::from_json(json).expect("fixture should parse"))
}

fn parent_names(schema: &Schema, name: &str) -> Vec<String> {
    match schema.parents_of(name).unwrap() {
        Parents::None => Vec::new(),
        Parents::Nodes(names) => names.iter().cloned().collect(),
    }
}

const FIXTURE: &str = indoc! {r#"
    {
        "nodes": {
            "Program": { "body": { "list": "Statement" } },
            "ExpressionStatement": { "expression": { "ref": "Expression" } },
            "CallExpression": {
                "callee": { "ref": "Expression" },
                "arguments": { "list": "Expression" }
            },
            "Identifier": { "name": "string" },
            "ObjectExpression": { "properties": { "list": "Property" } },
            "Property": {
                "key": { "ref": "Identifier" },
                "value": ["null", { "ref": "Expression" }]
            }
        },
        "statementType": ["ExpressionStatement"],
        "expressionType": ["CallExpression", "Identifier", "ObjectExpression"]
    }
"#};

#[test]
fn unreferenced_node_has_no_parents() {
    let schema = compile(FIXTURE);
    assert!(schema.is_valid(), "{}", schema.diagnostics().render());
    assert_eq!(*schema.parents_of("Program").unwrap(), Parents::None);
}

#[test]
fn sequence_positions_count_as_containment() {
    let schema = compile(FIXTURE);
    // ExpressionStatement appears only in Program.body, a sequence
    assert_eq!(parent_names(&schema, "ExpressionStatement"), vec!["Program"]);
}

#[test]
fn single_positions_count_as_containment() {
    let schema = compile(FIXTURE);
    // Property appears only in ObjectExpression.properties
    assert_eq!(parent_names(&schema, "Property"), vec!["ObjectExpression"]);
}

#[test]
fn union_positions_count_as_containment() {
    let schema = compile(FIXTURE);
    // ObjectExpression is an Expression: held by ExpressionStatement,
    // CallExpression, and Property.value (inside a union)
    assert_eq!(
        parent_names(&schema, "ObjectExpression"),
        vec!["ExpressionStatement", "CallExpression", "Property"]
    );
}

#[test]
fn parents_come_in_definition_order() {
    let schema = compile(FIXTURE);
    // Identifier is an Expression plus Property.key references it directly
    assert_eq!(
        parent_names(&schema, "Identifier"),
        vec!["ExpressionStatement", "CallExpression", "Property"]
    );
}

#[test]
fn each_referrer_appears_once() {
    // CallExpression holds expressions in two positions; it must still be
    // listed once
    let schema = compile(FIXTURE);
    let parents = parent_names(&schema, "CallExpression");
    assert_eq!(
        parents
            .iter()
            .filter(|name| name.as_str() == "CallExpression")
            .count(),
        1
    );
}

#[test]
fn self_reference_makes_a_node_its_own_parent() {
    let schema = compile(FIXTURE);
    // CallExpression.callee can be a CallExpression
    assert!(parent_names(&schema, "CallExpression").contains(&"CallExpression".to_string()));
}

#[test]
fn unresolved_markers_contribute_no_parents() {
    let definition = Definition::from_json(
        r#"{
            "nodes": {
                "Foo": { "target": { "ref": "Missing" } },
                "Bar": {}
            },
            "statementType": ["Foo", "Bar"],
            "expressionType": ["Bar"]
        }"#,
    )
    .unwrap();
    let schema = Schema::resolve_with(
        definition,
        SchemaOptions {
            strictness: Strictness::Lenient,
        },
    );
    // The marker names nothing resolvable, so no parent link appears
    assert_eq!(*schema.parents_of("Bar").unwrap(), Parents::None);
    assert_eq!(*schema.parents_of("Foo").unwrap(), Parents::None);
}

#[test]
fn enhancement_layer_widens_parents() {
    let base = Definition::from_json(FIXTURE).unwrap();
    let layer = Definition::from_json(
        r#"{
            "nodes": {
                "AwaitExpression": { "argument": { "ref": "Expression" } }
            },
            "expressionType": ["AwaitExpression"]
        }"#,
    )
    .unwrap();

    let schema = Schema::resolve(base.extend([layer]));
    assert!(schema.is_valid(), "{}", schema.diagnostics().render());
    assert_eq!(
        parent_names(&schema, "Identifier"),
        vec![
            "ExpressionStatement",
            "CallExpression",
            "Property",
            "AwaitExpression"
        ]
    );
}
