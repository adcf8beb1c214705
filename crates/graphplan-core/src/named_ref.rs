use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a "resource" (`TResource`)
/// stored within some other data-store (`TSource`), without holding a
/// reference to the data-store itself. De-referencing a [`NamedRef`] is done via
/// [`NamedRef::deref()`] by providing an explicit reference to the `TSource`.
///
/// For example, a [`TypeAnnotation`](crate::types::TypeAnnotation) names the
/// [`GraphQLType`](crate::types::GraphQLType) it annotates with a
/// [`NamedGraphQLTypeRef`](crate::types::NamedGraphQLTypeRef), and a variable
/// usage inside an argument literal points back at its declaring
/// [`Variable`](crate::operation::Variable) with a
/// [`NamedVariableRef`](crate::operation::NamedVariableRef). Neither holds a
/// borrow, so schema types and operations never need self-references.
///
/// `Clone`, `Debug` and `PartialEq` look only at the name and the reference
/// location, so neither `TSource` nor `TResource` needs to implement them.
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<fn() -> TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation: Clone,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> Clone for NamedRef<TSource, TRefLocation, TResource> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            phantom: PhantomData,
            ref_location: self.ref_location.clone(),
        }
    }
}
impl<
    TSource,
    TRefLocation: core::fmt::Debug,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> core::fmt::Debug for NamedRef<TSource, TRefLocation, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name)
            .field("ref_location", &self.ref_location)
            .finish()
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("`{0}` is not defined")]
    DanglingReference(String),
}
