use super::*;

fn parse(json: &str) -> Definition {
    Definition::from_json(json).unwrap()
}

#[test]
fn extend_with_no_layers_is_identity() {
    let base = parse(r#"{ "nodes": { "Identifier": { "name": "string" } } }"#);
    let merged = base.clone().extend([]);
    assert_eq!(merged, base);
}

#[test]
fn layer_adds_new_node_types() {
    let base = parse(r#"{ "nodes": { "Identifier": { "name": "string" } } }"#);
    let layer = parse(r#"{ "nodes": { "AwaitExpression": { "argument": { "ref": "Expression" } } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(merged.len(), 2);
    // New nodes append after existing ones
    let names: Vec<&str> = merged.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Identifier", "AwaitExpression"]);
}

#[test]
fn layer_adds_properties_to_existing_node() {
    let base = parse(r#"{ "nodes": { "FunctionDeclaration": { "id": { "ref": "Identifier" } } } }"#);
    let layer = parse(r#"{ "nodes": { "FunctionDeclaration": { "async": "boolean" } } }"#);

    let merged = base.extend([layer]);
    let shape = merged.get("FunctionDeclaration").unwrap();
    assert_eq!(shape.properties.len(), 2);
    assert_eq!(
        shape.properties["async"],
        Property::Value(ValueType::Boolean)
    );
}

#[test]
fn identical_property_stays_single() {
    let base = parse(r#"{ "nodes": { "Identifier": { "name": "string" } } }"#);
    let layer = parse(r#"{ "nodes": { "Identifier": { "name": "string" } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("Identifier").unwrap().properties["name"],
        Property::Value(ValueType::String)
    );
}

#[test]
fn sequences_merge_by_element_union() {
    let base = parse(r#"{ "nodes": { "FunctionDeclaration": { "params": { "list": "Identifier" } } } }"#);
    let layer =
        parse(r#"{ "nodes": { "FunctionDeclaration": { "params": { "list": "TSParameterProperty" } } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("FunctionDeclaration").unwrap().properties["params"],
        Property::RefList(vec![
            "Identifier".to_string(),
            "TSParameterProperty".to_string()
        ])
    );
}

#[test]
fn enums_merge_by_value_union() {
    let base = parse(r#"{ "nodes": { "VariableDeclaration": { "kind": { "enum": ["var"] } } } }"#);
    let layer =
        parse(r#"{ "nodes": { "VariableDeclaration": { "kind": { "enum": ["let", "const"] } } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("VariableDeclaration").unwrap().properties["kind"],
        Property::Value(ValueType::StrEnum(vec![
            "var".to_string(),
            "let".to_string(),
            "const".to_string()
        ]))
    );
}

#[test]
fn colliding_scalars_become_a_union() {
    let base = parse(r#"{ "nodes": { "Literal": { "value": "string" } } }"#);
    let layer = parse(r#"{ "nodes": { "Literal": { "value": "number" } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("Literal").unwrap().properties["value"],
        Property::Union(vec![
            Property::Value(ValueType::String),
            Property::Value(ValueType::Number)
        ])
    );
}

#[test]
fn union_collision_folds_flat_without_duplicates() {
    let base = parse(r#"{ "nodes": { "Literal": { "value": ["string", "number"] } } }"#);
    let layer = parse(r#"{ "nodes": { "Literal": { "value": ["number", "boolean"] } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("Literal").unwrap().properties["value"],
        Property::Union(vec![
            Property::Value(ValueType::String),
            Property::Value(ValueType::Number),
            Property::Value(ValueType::Boolean)
        ])
    );
}

#[test]
fn union_collision_keeps_a_single_sequence_member() {
    // base: null | Identifier[]; layer adds TSParameterProperty[]
    let base = parse(r#"{ "nodes": { "Foo": { "xs": ["null", { "list": "Identifier" }] } } }"#);
    let layer = parse(r#"{ "nodes": { "Foo": { "xs": { "list": "TSParameterProperty" } } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("Foo").unwrap().properties["xs"],
        Property::Union(vec![
            Property::Value(ValueType::Null),
            Property::RefList(vec![
                "Identifier".to_string(),
                "TSParameterProperty".to_string()
            ])
        ])
    );
}

#[test]
fn ref_collision_with_sequence_becomes_union_of_both() {
    let base = parse(r#"{ "nodes": { "Foo": { "x": { "ref": "Identifier" } } } }"#);
    let layer = parse(r#"{ "nodes": { "Foo": { "x": { "list": "Identifier" } } } }"#);

    let merged = base.extend([layer]);
    assert_eq!(
        merged.get("Foo").unwrap().properties["x"],
        Property::Union(vec![
            Property::Ref("Identifier".to_string()),
            Property::RefList(vec!["Identifier".to_string()])
        ])
    );
}

#[test]
fn bindings_take_set_union_in_first_seen_order() {
    let base = parse(r#"{ "nodes": {}, "statementType": ["A", "B"] }"#);
    let first = parse(r#"{ "nodes": {}, "statementType": ["B", "C"] }"#);
    let second = parse(r#"{ "nodes": {}, "expressionType": ["X"] }"#);

    let merged = base.extend([first, second]);
    assert_eq!(merged.statement_kinds, vec!["A", "B", "C"]);
    assert_eq!(merged.expression_kinds, vec!["X"]);
}

#[test]
fn layers_apply_left_to_right() {
    let base = parse(r#"{ "nodes": { "Foo": { "kind": { "enum": ["a"] } } } }"#);
    let first = parse(r#"{ "nodes": { "Foo": { "kind": { "enum": ["b"] } } } }"#);
    let second = parse(r#"{ "nodes": { "Foo": { "kind": { "enum": ["c"] } } } }"#);

    let merged = base.extend([first, second]);
    assert_eq!(
        merged.get("Foo").unwrap().properties["kind"],
        Property::Value(ValueType::StrEnum(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string()
        ]))
    );
}

#[test]
fn merge_is_idempotent_for_identical_layers() {
    let base = parse(
        r#"{
            "nodes": {
                "Program": { "body": { "list": "Statement" } },
                "Identifier": { "name": "string" }
            },
            "statementType": ["Program"]
        }"#,
    );

    let merged = base.clone().extend([base.clone()]);
    assert_eq!(merged, base);
}
