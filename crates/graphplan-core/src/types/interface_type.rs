use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InterfaceType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// Look up a [`Field`] declared on this type by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// Interfaces may themselves implement other interfaces.
    pub fn implements_interface(&self, interface: &InterfaceType) -> bool {
        self.0.implements_interface(interface)
    }

    /// The [`InterfaceType`]s implemented by this [`InterfaceType`], in
    /// declaration order.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s implemented by this [`InterfaceType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
