use crate::loc;

/// A custom scalar type. Literals of this type are resolved by the
/// [`ScalarValueResolver`](crate::input::ScalarValueResolver) registered
/// for it in the [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
