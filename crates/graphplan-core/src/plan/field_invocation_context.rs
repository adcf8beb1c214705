use crate::input::ArgumentValue;
use crate::loc::DocumentPosition;
use crate::plan::DirectiveInvocationContext;
use crate::plan::FieldResolver;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// One field to invoke: its resolver, arguments, directives and the child
/// invocations beneath it.
#[derive(Clone, Debug)]
pub struct FieldInvocationContext<'schema> {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, ArgumentValue<'schema>>,
    pub(super) children: Vec<FieldInvocationContext<'schema>>,
    pub(super) concrete_type: Option<&'schema ObjectType>,
    pub(super) directives: Vec<DirectiveInvocationContext<'schema>>,
    pub(super) field_name: &'schema str,
    pub(super) injected: bool,
    pub(super) location: DocumentPosition,
    pub(super) resolver: FieldResolver<'schema>,
}
impl<'schema> FieldInvocationContext<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentValue<'schema>> {
        self.arguments.get(name)
    }

    /// In the field's declared parameter order, defaults included.
    pub fn arguments(&self) -> &IndexMap<String, ArgumentValue<'schema>> {
        &self.arguments
    }

    /// The first child answering to `response_key`.
    pub fn child(&self, response_key: &str) -> Option<&FieldInvocationContext<'schema>> {
        self.children.iter().find(|child| child.response_key() == response_key)
    }

    pub fn children(&self) -> &[FieldInvocationContext<'schema>] {
        &self.children
    }

    /// Set when this invocation only applies to objects of one type.
    pub fn concrete_type(&self) -> Option<&'schema ObjectType> {
        self.concrete_type
    }

    pub fn directives(&self) -> &[DirectiveInvocationContext<'schema>] {
        &self.directives
    }

    pub fn field_name(&self) -> &'schema str {
        self.field_name
    }

    /// `true` for a `__typename` added by the generator rather than
    /// selected.
    pub fn injected(&self) -> bool {
        self.injected
    }

    pub fn location(&self) -> DocumentPosition {
        self.location
    }

    pub fn resolver(&self) -> FieldResolver<'schema> {
        self.resolver
    }

    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.field_name)
    }

    pub(super) fn write_tree(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        write!(f, "{:indent$}", "", indent = indent * 2)?;
        if let Some(alias) = &self.alias {
            write!(f, "{alias}: ")?;
        }
        f.write_str(self.field_name)?;
        if !self.arguments.is_empty() {
            f.write_str("(")?;
            for (idx, (name, value)) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: {value}")?;
            }
            f.write_str(")")?;
        }
        for directive in &self.directives {
            write!(f, " @{}", directive.name())?;
        }
        if let Some(concrete_type) = self.concrete_type {
            write!(f, " on {}", concrete_type.name())?;
        }
        if self.injected {
            f.write_str(" [injected]")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, indent + 1)?;
        }
        Ok(())
    }
}
