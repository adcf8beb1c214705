use crate::input::ArgumentValue;
use crate::input::DeferredArgument;
use crate::input::InvalidArgumentError;
use crate::input::ResolvedValue;
use crate::input::ScalarValueResolver;
use crate::input::VariableValue;
use crate::input::VariableValues;
use crate::operation::NamedVariableRef;
use crate::operation::SuppliedValue;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use graphplan_parser::syntax::ScalarValueKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, InvalidArgumentError>;

/// Classifies and resolves the [`SuppliedValue`]s of one operation.
///
/// ```
/// # use graphplan_core::input::ArgumentValue;
/// # use graphplan_core::input::InputValueResolver;
/// # use graphplan_core::input::ResolvedValue;
/// # use graphplan_core::loc::SourceLocation;
/// # use graphplan_core::operation::SuppliedValue;
/// # use graphplan_core::schema::FieldBuilder;
/// # use graphplan_core::schema::ObjectTypeBuilder;
/// # use graphplan_core::schema::SchemaBuilder;
/// # use graphplan_core::types::TypeAnnotation;
/// # use indexmap::IndexMap;
/// let schema = SchemaBuilder::new()
///     .object(ObjectTypeBuilder::new("Query").field(FieldBuilder::new("ok", "Boolean")))
///     .build()
///     .unwrap();
/// let variables = IndexMap::new();
/// let resolver = InputValueResolver::new(&schema, &variables);
/// let target = TypeAnnotation::parse("[Int]", SourceLocation::Schema).unwrap();
/// let value = SuppliedValue::parse_const("7").unwrap();
/// let ArgumentValue::Resolved(resolved) = resolver.resolve(&value, &target).unwrap() else {
///     unreachable!();
/// };
/// assert_eq!(resolved, ResolvedValue::List(vec![ResolvedValue::Int(7)]));
/// ```
#[derive(Debug)]
pub struct InputValueResolver<'schema, 'op> {
    schema: &'schema Schema,
    variables: &'op IndexMap<String, Variable>,
}
impl<'schema, 'op> InputValueResolver<'schema, 'op> {
    pub fn new(
        schema: &'schema Schema,
        variables: &'op IndexMap<String, Variable>,
    ) -> Self {
        Self { schema, variables }
    }

    /// Resolves `value` against `target`, or defers it when it references a
    /// variable at any depth.
    pub fn resolve(
        &self,
        value: &SuppliedValue,
        target: &TypeAnnotation,
    ) -> Result<ArgumentValue<'schema>> {
        self.resolve_with_default(value, target, None)
    }

    /// Like [`resolve()`](Self::resolve), for an argument whose parameter
    /// declares `default`. A bare variable that is absent at execution time
    /// falls back to the parameter's default.
    pub fn resolve_with_default(
        &self,
        value: &SuppliedValue,
        target: &TypeAnnotation,
        default: Option<&SuppliedValue>,
    ) -> Result<ArgumentValue<'schema>> {
        if !value.contains_variable() {
            return ValueCoercer::new(self.schema)
                .coerce_supplied(value, target)
                .map(ArgumentValue::Resolved);
        }

        let mut variables = IndexMap::new();
        for var_ref in value.variable_refs() {
            let variable = var_ref.deref(self.variables).map_err(|_| {
                InvalidArgumentError::UndeclaredVariable {
                    variable_name: var_ref.name().to_string(),
                }
            })?;
            variables.entry(variable.name().to_string()).or_insert_with(|| variable.clone());
        }
        log::trace!(
            "deferring `{value}` until {} variable(s) are bound",
            variables.len(),
        );
        Ok(ArgumentValue::Deferred(DeferredArgument {
            fallback: default.cloned(),
            schema: self.schema,
            target: target.clone(),
            value: value.clone(),
            variables,
        }))
    }
}

/// Where a variable's value comes from at execution time.
enum VariableSource<'a> {
    Provided(&'a VariableValue),
    Default(&'a SuppliedValue),
    Absent,
}

struct RuntimeBindings<'a> {
    declared: &'a IndexMap<String, Variable>,
    values: &'a VariableValues,
}

/// Input coercion shared by immediate and deferred resolution.
pub(crate) struct ValueCoercer<'a> {
    runtime: Option<RuntimeBindings<'a>>,
    schema: &'a Schema,
}
impl<'a> ValueCoercer<'a> {
    pub(crate) fn new(schema: &'a Schema) -> Self {
        Self {
            runtime: None,
            schema,
        }
    }

    pub(crate) fn with_variables(
        schema: &'a Schema,
        declared: &'a IndexMap<String, Variable>,
        values: &'a VariableValues,
    ) -> Self {
        Self {
            runtime: Some(RuntimeBindings { declared, values }),
            schema,
        }
    }

    /// Whether `value` is a bare variable with nothing to supply: not
    /// provided, no default, nullable.
    pub(crate) fn is_absent_variable(&self, value: &SuppliedValue) -> bool {
        match value {
            SuppliedValue::Variable(var_ref) => {
                matches!(self.variable_source(var_ref), Ok(VariableSource::Absent))
            },
            _ => false,
        }
    }

    fn variable_source(&self, var_ref: &NamedVariableRef) -> Result<VariableSource<'a>> {
        let undeclared = || InvalidArgumentError::UndeclaredVariable {
            variable_name: var_ref.name().to_string(),
        };
        let runtime = self.runtime.as_ref().ok_or_else(undeclared)?;
        let variable = var_ref.deref(runtime.declared).map_err(|_| undeclared())?;
        if let Some(value) = runtime.values.get(variable.name()) {
            return Ok(VariableSource::Provided(value));
        }
        match variable.default_value() {
            Some(default) => Ok(VariableSource::Default(default)),
            None if variable.type_annotation().nullable() => Ok(VariableSource::Absent),
            None => Err(InvalidArgumentError::MissingRequiredVariable {
                variable_name: variable.name().to_string(),
                type_annotation: variable.type_annotation().to_string(),
            }),
        }
    }

    fn coerce_null(&self, target: &TypeAnnotation) -> Result<ResolvedValue> {
        if target.nullable() {
            Ok(ResolvedValue::Null)
        } else {
            Err(InvalidArgumentError::NullForNonNull {
                type_annotation: target.to_string(),
            })
        }
    }

    fn input_type(&self, named: &NamedTypeAnnotation) -> Result<&'a GraphQLType> {
        named.graphql_type(self.schema).ok_or_else(|| InvalidArgumentError::UnknownType {
            type_name: named.graphql_type_name().to_string(),
        })
    }

    fn scalar_resolver(&self, type_name: &str) -> Result<&'a dyn ScalarValueResolver> {
        self.schema.scalar_resolver(type_name).ok_or_else(|| {
            InvalidArgumentError::NoScalarResolver {
                type_name: type_name.to_string(),
            }
        })
    }

    pub(crate) fn coerce_supplied(
        &self,
        value: &SuppliedValue,
        target: &TypeAnnotation,
    ) -> Result<ResolvedValue> {
        if let SuppliedValue::Variable(var_ref) = value {
            return match self.variable_source(var_ref)? {
                VariableSource::Provided(runtime_value) => {
                    self.coerce_variable_value(runtime_value, target)
                },
                VariableSource::Default(default) => self.coerce_supplied(default, target),
                VariableSource::Absent => self.coerce_null(target),
            };
        }
        if value.is_null() {
            return self.coerce_null(target);
        }

        match target {
            TypeAnnotation::List(list_annot) => {
                let inner = list_annot.inner_type_annotation();
                match value {
                    SuppliedValue::List(items) => items
                        .iter()
                        .map(|item| match item {
                            // Only the outermost list accepts a bare item.
                            SuppliedValue::List(_) | SuppliedValue::Variable(_) => {
                                self.coerce_supplied(item, inner)
                            },
                            _ if inner.is_list() && !item.is_null() => {
                                Err(InvalidArgumentError::InvalidLiteral {
                                    type_name: inner.to_string(),
                                    found: item.to_string(),
                                })
                            },
                            _ => self.coerce_supplied(item, inner),
                        })
                        .collect::<Result<Vec<_>>>()
                        .map(ResolvedValue::List),
                    single => Ok(ResolvedValue::List(vec![self.coerce_supplied(single, inner)?])),
                }
            },
            TypeAnnotation::Named(named) => self.coerce_supplied_named(value, named),
        }
    }

    fn coerce_supplied_named(
        &self,
        value: &SuppliedValue,
        named: &NamedTypeAnnotation,
    ) -> Result<ResolvedValue> {
        let type_name = named.graphql_type_name();
        let invalid = || InvalidArgumentError::InvalidLiteral {
            type_name: type_name.to_string(),
            found: value.to_string(),
        };

        match self.input_type(named)? {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String => {
                let literal = value.as_scalar().ok_or_else(invalid)?;
                self.scalar_resolver(type_name)?.resolve(literal)
            },

            GraphQLType::Enum(enum_type) => match value.as_scalar() {
                Some(literal) if literal.kind() == ScalarValueKind::Enum => {
                    if enum_type.has_value(literal.text()) {
                        Ok(ResolvedValue::Enum(literal.text().to_string()))
                    } else {
                        Err(InvalidArgumentError::UnknownEnumValue {
                            type_name: type_name.to_string(),
                            value: literal.text().to_string(),
                        })
                    }
                },
                _ => Err(invalid()),
            },

            GraphQLType::InputObject(input_type) => match value {
                SuppliedValue::Object(fields) => self.coerce_input_object(
                    input_type,
                    fields.keys().map(String::as_str),
                    |field_name, field_type| match fields.get(field_name) {
                        Some(field_value) if !self.is_absent_variable(field_value) => {
                            Some(self.coerce_supplied(field_value, field_type))
                        },
                        _ => None,
                    },
                ),
                _ => Err(invalid()),
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                Err(InvalidArgumentError::NotAnInputType {
                    type_name: type_name.to_string(),
                })
            },
        }
    }

    /// Coerces a runtime variable value against the type of the position it
    /// is used in.
    pub(crate) fn coerce_variable_value(
        &self,
        value: &VariableValue,
        target: &TypeAnnotation,
    ) -> Result<ResolvedValue> {
        if value.is_null() {
            return self.coerce_null(target);
        }

        let named = match target {
            TypeAnnotation::List(list_annot) => {
                let inner = list_annot.inner_type_annotation();
                return match value {
                    VariableValue::List(items) => items
                        .iter()
                        .map(|item| match item {
                            VariableValue::List(_) => self.coerce_variable_value(item, inner),
                            _ if inner.is_list() && !item.is_null() => {
                                Err(InvalidArgumentError::InvalidLiteral {
                                    type_name: inner.to_string(),
                                    found: item.to_string(),
                                })
                            },
                            _ => self.coerce_variable_value(item, inner),
                        })
                        .collect::<Result<Vec<_>>>()
                        .map(ResolvedValue::List),
                    single => Ok(ResolvedValue::List(vec![
                        self.coerce_variable_value(single, inner)?,
                    ])),
                };
            },
            TypeAnnotation::Named(named) => named,
        };

        let type_name = named.graphql_type_name();
        let invalid = || InvalidArgumentError::InvalidLiteral {
            type_name: type_name.to_string(),
            found: value.to_string(),
        };
        match self.input_type(named)? {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String => self.scalar_resolver(type_name)?.resolve_variable(value),

            GraphQLType::Enum(enum_type) => match value {
                VariableValue::String(name) if enum_type.has_value(name) => {
                    Ok(ResolvedValue::Enum(name.clone()))
                },
                VariableValue::String(name) => Err(InvalidArgumentError::UnknownEnumValue {
                    type_name: type_name.to_string(),
                    value: name.clone(),
                }),
                _ => Err(invalid()),
            },

            GraphQLType::InputObject(input_type) => match value {
                VariableValue::Object(fields) => self.coerce_input_object(
                    input_type,
                    fields.keys().map(String::as_str),
                    |field_name, field_type| {
                        fields
                            .get(field_name)
                            .map(|field_value| self.coerce_variable_value(field_value, field_type))
                    },
                ),
                _ => Err(invalid()),
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                Err(InvalidArgumentError::NotAnInputType {
                    type_name: type_name.to_string(),
                })
            },
        }
    }

    /// Resolves an input object in the type's declared field order. `field`
    /// yields the coerced value of a supplied field, or `None` when the field
    /// was not supplied.
    fn coerce_input_object<'k>(
        &self,
        input_type: &InputObjectType,
        supplied_names: impl Iterator<Item = &'k str>,
        field: impl Fn(&str, &TypeAnnotation) -> Option<Result<ResolvedValue>>,
    ) -> Result<ResolvedValue> {
        for name in supplied_names {
            if input_type.field(name).is_none() {
                return Err(InvalidArgumentError::UnknownInputField {
                    type_name: input_type.name().to_string(),
                    field_name: name.to_string(),
                });
            }
        }

        let mut resolved = IndexMap::with_capacity(input_type.fields().len());
        for (field_name, input_field) in input_type.fields() {
            let field_type = input_field.type_annotation();
            let value = match field(field_name, field_type) {
                Some(value) => value?,
                None => match input_field.default_value() {
                    Some(default) => self.coerce_supplied(default, field_type)?,
                    None if !field_type.nullable() => {
                        return Err(InvalidArgumentError::MissingInputField {
                            type_name: input_type.name().to_string(),
                            field_name: field_name.to_string(),
                        });
                    },
                    None => continue,
                },
            };
            resolved.insert(field_name.to_string(), value);
        }
        Ok(ResolvedValue::Object(resolved))
    }
}
