use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`].
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;

    fn field(&self, name: &str) -> Option<&Field>;

    fn fields(&self) -> &IndexMap<String, Field>;

    fn implements_interface(&self, interface: &InterfaceType) -> bool;

    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;

    fn interface_names(&self) -> Vec<&str>;

    fn name(&self) -> &str;
}
