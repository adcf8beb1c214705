use crate::types::DirectiveLocation;

/// An argument or input field as declared to a builder: its type annotation
/// text (`"[ID!]!"`) and optional default-value literal.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InputValueSpec {
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: String,
}
impl InputValueSpec {
    fn new(name: &str, type_annotation: &str, default_value: Option<&str>) -> Self {
        Self {
            default_value: default_value.map(str::to_string),
            name: name.to_string(),
            type_annotation: type_annotation.to_string(),
        }
    }
}

/// Declares a field of an object or interface type.
///
/// ```
/// # use graphplan_core::schema::FieldBuilder;
/// let field = FieldBuilder::new("friends", "[User!]!")
///     .arg_with_default("first", "Int", "10")
///     .cost(2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuilder {
    pub(crate) arguments: Vec<InputValueSpec>,
    pub(crate) cost: Option<f64>,
    pub(crate) is_virtual: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: String,
}
impl FieldBuilder {
    pub fn new(name: impl AsRef<str>, type_annotation: impl AsRef<str>) -> Self {
        Self {
            arguments: vec![],
            cost: None,
            is_virtual: false,
            name: name.as_ref().to_string(),
            type_annotation: type_annotation.as_ref().to_string(),
        }
    }

    pub fn arg(mut self, name: impl AsRef<str>, type_annotation: impl AsRef<str>) -> Self {
        self.arguments.push(InputValueSpec::new(name.as_ref(), type_annotation.as_ref(), None));
        self
    }

    pub fn arg_with_default(
        mut self,
        name: impl AsRef<str>,
        type_annotation: impl AsRef<str>,
        default_value: impl AsRef<str>,
    ) -> Self {
        self.arguments.push(InputValueSpec::new(
            name.as_ref(),
            type_annotation.as_ref(),
            Some(default_value.as_ref()),
        ));
        self
    }

    /// Base cost of selecting this field, in place of the configured
    /// default.
    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Marks a structural field that groups nested route fields and has no
    /// resolver of its own.
    pub fn virtual_field(mut self) -> Self {
        self.is_virtual = true;
        self
    }
}

/// Declares an object type.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeBuilder {
    pub(crate) fields: Vec<FieldBuilder>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            fields: vec![],
            interfaces: vec![],
            name: name.as_ref().to_string(),
        }
    }

    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    pub fn implements(mut self, interface_name: impl AsRef<str>) -> Self {
        self.interfaces.push(interface_name.as_ref().to_string());
        self
    }
}

/// Declares an interface type. Interfaces may implement other interfaces.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeBuilder(pub(crate) ObjectTypeBuilder);
impl InterfaceTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(ObjectTypeBuilder::new(name))
    }

    pub fn field(self, field: FieldBuilder) -> Self {
        Self(self.0.field(field))
    }

    pub fn implements(self, interface_name: impl AsRef<str>) -> Self {
        Self(self.0.implements(interface_name))
    }
}

/// Declares an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeBuilder {
    pub(crate) fields: Vec<InputValueSpec>,
    pub(crate) name: String,
}
impl InputObjectTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            fields: vec![],
            name: name.as_ref().to_string(),
        }
    }

    pub fn field(mut self, name: impl AsRef<str>, type_annotation: impl AsRef<str>) -> Self {
        self.fields.push(InputValueSpec::new(name.as_ref(), type_annotation.as_ref(), None));
        self
    }

    pub fn field_with_default(
        mut self,
        name: impl AsRef<str>,
        type_annotation: impl AsRef<str>,
        default_value: impl AsRef<str>,
    ) -> Self {
        self.fields.push(InputValueSpec::new(
            name.as_ref(),
            type_annotation.as_ref(),
            Some(default_value.as_ref()),
        ));
        self
    }
}

/// Declares a custom directive usable in executable documents.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveBuilder {
    pub(crate) arguments: Vec<InputValueSpec>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            arguments: vec![],
            locations: vec![],
            name: name.as_ref().trim_start_matches('@').to_string(),
            repeatable: false,
        }
    }

    pub fn arg(mut self, name: impl AsRef<str>, type_annotation: impl AsRef<str>) -> Self {
        self.arguments.push(InputValueSpec::new(name.as_ref(), type_annotation.as_ref(), None));
        self
    }

    pub fn arg_with_default(
        mut self,
        name: impl AsRef<str>,
        type_annotation: impl AsRef<str>,
        default_value: impl AsRef<str>,
    ) -> Self {
        self.arguments.push(InputValueSpec::new(
            name.as_ref(),
            type_annotation.as_ref(),
            Some(default_value.as_ref()),
        ));
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }
}
