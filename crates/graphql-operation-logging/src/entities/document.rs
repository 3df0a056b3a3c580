/// Kind of GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// A single top-level field selection with an optional alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub alias: Option<String>,
}

impl Selection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// One operation defined in a GraphQL document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub selections: Vec<Selection>,
}

impl OperationDefinition {
    pub fn query() -> Self {
        Self {
            kind: OperationKind::Query,
            name: None,
            selections: Vec::new(),
        }
    }

    pub fn mutation() -> Self {
        Self {
            kind: OperationKind::Mutation,
            name: None,
            selections: Vec::new(),
        }
    }

    pub fn subscription() -> Self {
        Self {
            kind: OperationKind::Subscription,
            name: None,
            selections: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    pub fn with_selections(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selections.extend(selections);
        self
    }
}

/// An already-parsed GraphQL document, reduced to what logging needs.
///
/// Built once per execution by the host gateway; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub definitions: Vec<OperationDefinition>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, definition: OperationDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn with_definitions(
        mut self,
        definitions: impl IntoIterator<Item = OperationDefinition>,
    ) -> Self {
        self.definitions.extend(definitions);
        self
    }
}
