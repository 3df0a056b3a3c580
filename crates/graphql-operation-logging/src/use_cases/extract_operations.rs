use crate::entities::{Document, OperationKind};

/// Flatten the top-level field selections of every definition matching
/// `kind` into one ordered list of logged tokens.
///
/// Order is preserved across multiple definitions of the same kind. With
/// `prepend_alias`, an aliased selection is logged as `alias:field`.
/// Subscriptions never match; logging them is out of scope.
pub fn extract_operation_names(
    document: &Document,
    kind: OperationKind,
    prepend_alias: bool,
) -> Vec<String> {
    document
        .definitions
        .iter()
        .filter(|definition| definition.kind == kind)
        .flat_map(|definition| definition.selections.iter())
        .map(|selection| match (&selection.alias, prepend_alias) {
            (Some(alias), true) => format!("{}:{}", alias, selection.name),
            _ => selection.name.clone(),
        })
        .collect()
}
