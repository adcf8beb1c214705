use crate::operation::FieldSelection;

/// The merged, fragment-free fields selected on one type.
///
/// Within a set no two entries share both a response key and a
/// [restriction](FieldSelection::restriction).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSelectionSet<'schema> {
    pub(super) fields: Vec<FieldSelection<'schema>>,
}
impl<'schema> FieldSelectionSet<'schema> {
    pub fn fields(&self) -> &[FieldSelection<'schema>] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSelection<'schema>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Every entry answering to `response_key`, across restrictions.
    pub fn by_response_key<'a>(
        &'a self,
        response_key: &'a str,
    ) -> impl Iterator<Item = &'a FieldSelection<'schema>> + 'a {
        self.fields
            .iter()
            .filter(move |selection| selection.response_key() == response_key)
    }

    /// Names of the concrete types some entry is restricted to, in the
    /// order they first appear.
    pub fn restriction_names(&self) -> Vec<&'schema str> {
        let mut names: Vec<&'schema str> = vec![];
        for restriction in self.fields.iter().filter_map(|selection| selection.restriction) {
            if !names.contains(&restriction.name()) {
                names.push(restriction.name());
            }
        }
        names
    }

    pub fn restricted_to<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a FieldSelection<'schema>> + 'a {
        self.fields.iter().filter(move |selection| {
            selection.restriction.is_some_and(|obj| obj.name() == type_name)
        })
    }

    pub fn unrestricted(&self) -> impl Iterator<Item = &FieldSelection<'schema>> {
        self.fields.iter().filter(|selection| selection.restriction.is_none())
    }
}
impl<'a, 'schema> IntoIterator for &'a FieldSelectionSet<'schema> {
    type Item = &'a FieldSelection<'schema>;
    type IntoIter = std::slice::Iter<'a, FieldSelection<'schema>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
