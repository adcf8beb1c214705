use crate::loc;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) ref_location: loc::SourceLocation,
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
