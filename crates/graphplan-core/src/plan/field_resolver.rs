use crate::types::Field;

/// Resolvers built into the executor rather than declared by the schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InternalResolver {
    /// Answers `__typename` with the concrete object type's name.
    TypeName,

    /// A structural field that only groups nested route fields.
    VirtualRouteGroup,
}

/// What an executor runs to produce a field's value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldResolver<'schema> {
    Declared(&'schema Field),
    Internal(InternalResolver),
}
impl<'schema> FieldResolver<'schema> {
    pub fn as_declared(&self) -> Option<&'schema Field> {
        if let Self::Declared(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
