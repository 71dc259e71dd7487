//! Structural validation of the merged definition.
//!
//! Checks that do not need reference expansion: reserved names, group
//! bindings, and empty constructs. This stage also fixes the validated
//! group member sets used by everything downstream.

use astgraft_core::{MetaName, Property, RESERVED_PROPERTIES};
use indexmap::IndexSet;

use crate::diagnostics::{DiagnosticKind, SchemaPath};

use super::Schema;

impl Schema {
    pub(super) fn validate(&mut self) {
        if self.definition.is_empty() {
            self.validate_diagnostics
                .report(DiagnosticKind::EmptyDefinition, SchemaPath::root())
                .emit();
        }

        self.validate_shapes();

        let statement_names = self.definition.statement_kinds.clone();
        self.statement_kinds = self.check_binding(
            "statementType",
            statement_names,
            DiagnosticKind::MissingStatementBinding,
        );
        let expression_names = self.definition.expression_kinds.clone();
        self.expression_kinds = self.check_binding(
            "expressionType",
            expression_names,
            DiagnosticKind::MissingExpressionBinding,
        );
    }

    fn validate_shapes(&mut self) {
        let mut findings: Vec<(DiagnosticKind, SchemaPath, Option<String>)> = Vec::new();

        for (node_name, shape) in self.definition.iter() {
            if MetaName::from_name(node_name).is_some() {
                findings.push((
                    DiagnosticKind::ReservedNodeName,
                    SchemaPath::node(node_name),
                    Some(node_name.to_string()),
                ));
            }
            for (property_name, property) in &shape.properties {
                let path = SchemaPath::property(node_name, property_name);
                if RESERVED_PROPERTIES.contains(&property_name.as_str()) {
                    findings.push((
                        DiagnosticKind::ReservedProperty,
                        path,
                        Some(property_name.clone()),
                    ));
                    continue;
                }
                check_empty_lists(property, &path, &mut findings);
            }
        }

        for (kind, path, detail) in findings {
            let builder = self.validate_diagnostics.report(kind, path);
            match detail {
                Some(detail) => builder.message(detail).emit(),
                None => builder.emit(),
            }
        }
    }

    /// Check one group binding, returning its validated member set.
    ///
    /// Duplicate entries collapse silently; entries naming nothing or naming
    /// a meta type are reported and dropped.
    fn check_binding(
        &mut self,
        key: &'static str,
        names: Vec<String>,
        missing: DiagnosticKind,
    ) -> IndexSet<String> {
        if names.is_empty() {
            self.validate_diagnostics
                .report(missing, SchemaPath::key(key))
                .emit();
            return IndexSet::new();
        }

        let mut members = IndexSet::new();
        for (index, name) in names.into_iter().enumerate() {
            let path = SchemaPath::binding(key, index);
            if MetaName::from_name(&name).is_some() {
                self.validate_diagnostics
                    .report(DiagnosticKind::MetaNameInBinding, path)
                    .message(&name)
                    .emit();
                continue;
            }
            if !self.definition.contains(&name) {
                self.validate_diagnostics
                    .report(DiagnosticKind::UnknownBindingTarget, path)
                    .message(&name)
                    .emit();
                continue;
            }
            members.insert(name);
        }
        members
    }
}

fn check_empty_lists(
    property: &Property,
    path: &SchemaPath,
    out: &mut Vec<(DiagnosticKind, SchemaPath, Option<String>)>,
) {
    match property {
        Property::RefList(names) if names.is_empty() => {
            out.push((DiagnosticKind::EmptyRefList, path.clone(), None));
        }
        Property::Union(members) => {
            for member in members {
                check_empty_lists(member, path, out);
            }
        }
        _ => {}
    }
}
