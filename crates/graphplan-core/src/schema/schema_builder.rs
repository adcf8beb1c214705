use crate::input::BooleanResolver;
use crate::input::CustomScalarResolver;
use crate::input::FloatResolver;
use crate::input::IdResolver;
use crate::input::IntResolver;
use crate::input::ScalarValueResolver;
use crate::input::StringResolver;
use crate::input::ValueCoercer;
use crate::loc;
use crate::operation::SuppliedValue;
use crate::schema::DirectiveBuilder;
use crate::schema::FieldBuilder;
use crate::schema::InputObjectTypeBuilder;
use crate::schema::InterfaceTypeBuilder;
use crate::schema::ObjectTypeBuilder;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::type_builders::InputValueSpec;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Vec<SchemaBuildError>>;

/// Builds a [`Schema`] programmatically.
///
/// Type annotations and default values are written in GraphQL syntax and
/// checked when [`build()`](Self::build) runs; every problem found is
/// returned at once.
///
/// ```
/// use graphplan_core::schema::FieldBuilder;
/// use graphplan_core::schema::ObjectTypeBuilder;
/// use graphplan_core::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .object(ObjectTypeBuilder::new("Query").field(FieldBuilder::new("me", "User")))
///     .object(
///         ObjectTypeBuilder::new("User")
///             .field(FieldBuilder::new("id", "ID!"))
///             .field(FieldBuilder::new("friends", "[User!]!").arg("first", "Int")),
///     )
///     .build()
///     .unwrap();
/// assert!(schema.field("User", "friends").is_some());
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: Vec<DirectiveBuilder>,
    enums: Vec<(String, Vec<String>)>,
    input_objects: Vec<InputObjectTypeBuilder>,
    interfaces: Vec<InterfaceTypeBuilder>,
    mutation_type: Option<String>,
    objects: Vec<ObjectTypeBuilder>,
    query_type: Option<String>,
    scalars: Vec<(String, Arc<dyn ScalarValueResolver>)>,
    subscription_type: Option<String>,
    unions: Vec<(String, Vec<String>)>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directives: vec![],
            enums: vec![],
            input_objects: vec![],
            interfaces: vec![],
            mutation_type: None,
            objects: vec![],
            query_type: None,
            scalars: vec![],
            subscription_type: None,
            unions: vec![],
        }
    }

    pub fn directive(mut self, directive: DirectiveBuilder) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn enum_type(
        mut self,
        name: impl AsRef<str>,
        values: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        self.enums.push((
            name.as_ref().to_string(),
            values.into_iter().map(|value| value.as_ref().to_string()).collect(),
        ));
        self
    }

    pub fn input_object(mut self, input_object: InputObjectTypeBuilder) -> Self {
        self.input_objects.push(input_object);
        self
    }

    pub fn interface(mut self, interface: InterfaceTypeBuilder) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Defaults to an object type named `Mutation`, if one is defined.
    pub fn mutation_type(mut self, name: impl AsRef<str>) -> Self {
        self.mutation_type = Some(name.as_ref().to_string());
        self
    }

    pub fn object(mut self, object: ObjectTypeBuilder) -> Self {
        self.objects.push(object);
        self
    }

    /// Defaults to `Query`.
    pub fn query_type(mut self, name: impl AsRef<str>) -> Self {
        self.query_type = Some(name.as_ref().to_string());
        self
    }

    /// A custom scalar whose values are accepted without interpretation.
    pub fn scalar(self, name: impl AsRef<str>) -> Self {
        let resolver = Arc::new(CustomScalarResolver::new(name.as_ref()));
        self.scalar_with_resolver(name, resolver)
    }

    pub fn scalar_with_resolver(
        mut self,
        name: impl AsRef<str>,
        resolver: Arc<dyn ScalarValueResolver>,
    ) -> Self {
        self.scalars.push((name.as_ref().to_string(), resolver));
        self
    }

    /// Defaults to an object type named `Subscription`, if one is defined.
    pub fn subscription_type(mut self, name: impl AsRef<str>) -> Self {
        self.subscription_type = Some(name.as_ref().to_string());
        self
    }

    pub fn union(
        mut self,
        name: impl AsRef<str>,
        members: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        self.unions.push((
            name.as_ref().to_string(),
            members.into_iter().map(|member| member.as_ref().to_string()).collect(),
        ));
        self
    }

    /// Consume this [`SchemaBuilder`] to produce a [`Schema`].
    pub fn build(self) -> Result<Schema> {
        let mut errors = vec![];
        let mut types = builtin_types();
        let mut scalar_resolvers = builtin_scalar_resolvers();

        let define = |
            types: &mut IndexMap<String, GraphQLType>,
            errors: &mut Vec<SchemaBuildError>,
            name: &str,
            type_: GraphQLType,
        | {
            if name.starts_with("__") {
                errors.push(SchemaBuildError::ReservedName { name: name.to_string() });
            } else if types.contains_key(name) {
                errors.push(SchemaBuildError::DuplicateTypeName { type_name: name.to_string() });
            } else {
                types.insert(name.to_string(), type_);
            }
        };

        for (name, resolver) in self.scalars {
            let scalar = ScalarType {
                def_location: loc::SourceLocation::Schema,
                name: name.clone(),
            };
            let is_new = !types.contains_key(&name);
            define(&mut types, &mut errors, &name, GraphQLType::Scalar(scalar));
            if is_new {
                scalar_resolvers.insert(name, resolver);
            }
        }

        for (name, values) in self.enums {
            let mut enum_values = IndexMap::with_capacity(values.len());
            for value in values {
                if enum_values.contains_key(&value) {
                    errors.push(SchemaBuildError::DuplicateEnumValue {
                        type_name: name.clone(),
                        value,
                    });
                    continue;
                }
                enum_values.insert(value.clone(), EnumValue {
                    name: value,
                    parent_type_name: name.clone(),
                });
            }
            let enum_type = EnumType {
                def_location: loc::SourceLocation::Schema,
                name: name.clone(),
                values: enum_values,
            };
            define(&mut types, &mut errors, &name, GraphQLType::Enum(enum_type));
        }

        for (name, members) in self.unions {
            let members = members
                .into_iter()
                .map(|member| {
                    let type_ref = NamedGraphQLTypeRef::new(&member, loc::SourceLocation::Schema);
                    (member, type_ref)
                })
                .collect();
            let union_type = UnionType {
                def_location: loc::SourceLocation::Schema,
                name: name.clone(),
                members,
            };
            define(&mut types, &mut errors, &name, GraphQLType::Union(union_type));
        }

        for InterfaceTypeBuilder(builder) in self.interfaces {
            let name = builder.name.clone();
            let data = build_object_or_interface_data(builder, &mut errors);
            define(&mut types, &mut errors, &name, GraphQLType::Interface(InterfaceType(data)));
        }

        for builder in self.objects {
            let name = builder.name.clone();
            let data = build_object_or_interface_data(builder, &mut errors);
            define(&mut types, &mut errors, &name, GraphQLType::Object(ObjectType(data)));
        }

        for builder in self.input_objects {
            let name = builder.name.clone();
            let mut fields = IndexMap::with_capacity(builder.fields.len());
            for spec in builder.fields {
                let owner = format!("{name}.{}", spec.name);
                if fields.contains_key(&spec.name) {
                    errors.push(SchemaBuildError::DuplicateFieldName {
                        type_name: name.clone(),
                        field_name: spec.name,
                    });
                    continue;
                }
                if let Some((type_annotation, default_value)) = build_input_value(&owner, &spec, &mut errors) {
                    fields.insert(spec.name.clone(), InputField {
                        def_location: loc::SourceLocation::Schema,
                        default_value,
                        name: spec.name,
                        parent_type_name: name.clone(),
                        type_annotation,
                    });
                }
            }
            let input_type = InputObjectType {
                def_location: loc::SourceLocation::Schema,
                fields,
                name: name.clone(),
            };
            define(&mut types, &mut errors, &name, GraphQLType::InputObject(input_type));
        }

        let mut directives = builtin_directives();
        for builder in self.directives {
            if directives.contains_key(&builder.name) {
                errors.push(SchemaBuildError::DuplicateDirectiveName {
                    directive_name: builder.name,
                });
                continue;
            }
            let parameters = build_parameters(&format!("@{}", builder.name), builder.arguments, &mut errors);
            directives.insert(builder.name.clone(), Directive {
                def_location: loc::SourceLocation::Schema,
                locations: builder.locations,
                name: builder.name,
                parameters,
                repeatable: builder.repeatable,
            });
        }

        validate_type_references(&types, &directives, &mut errors);
        let (query_type, mutation_type, subscription_type) = resolve_root_types(
            &types,
            self.query_type,
            self.mutation_type,
            self.subscription_type,
            &mut errors,
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        let schema = Schema {
            directives,
            mutation_type,
            possible_types: compute_possible_types(&types),
            query_type,
            scalar_resolvers,
            subscription_type,
            types,
        };

        validate_interface_implementations(&schema, &mut errors);
        validate_default_values(&schema, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "built schema with {} types and {} directives",
            schema.types.len(),
            schema.directives.len(),
        );
        Ok(schema)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_types() -> IndexMap<String, GraphQLType> {
    IndexMap::from([
        ("Boolean".to_string(), GraphQLType::Bool),
        ("Float".to_string(), GraphQLType::Float),
        ("ID".to_string(), GraphQLType::ID),
        ("Int".to_string(), GraphQLType::Int),
        ("String".to_string(), GraphQLType::String),
    ])
}

fn builtin_scalar_resolvers() -> HashMap<String, Arc<dyn ScalarValueResolver>> {
    HashMap::from([
        ("Boolean".to_string(), Arc::new(BooleanResolver) as Arc<dyn ScalarValueResolver>),
        ("Float".to_string(), Arc::new(FloatResolver) as Arc<dyn ScalarValueResolver>),
        ("ID".to_string(), Arc::new(IdResolver) as Arc<dyn ScalarValueResolver>),
        ("Int".to_string(), Arc::new(IntResolver) as Arc<dyn ScalarValueResolver>),
        ("String".to_string(), Arc::new(StringResolver) as Arc<dyn ScalarValueResolver>),
    ])
}

/// `@skip(if: Boolean!)` and `@include(if: Boolean!)`.
fn builtin_directives() -> IndexMap<String, Directive> {
    let condition = |name: &str| Directive {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        locations: vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        name: name.to_string(),
        parameters: IndexMap::from([(
            "if".to_string(),
            Parameter {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                default_value: None,
                name: "if".to_string(),
                type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                    nullable: false,
                    type_ref: NamedGraphQLTypeRef::new(
                        "Boolean",
                        loc::SourceLocation::GraphQLBuiltIn,
                    ),
                }),
            },
        )]),
        repeatable: false,
    };
    IndexMap::from([
        ("skip".to_string(), condition("skip")),
        ("include".to_string(), condition("include")),
    ])
}

fn parse_annotation(
    owner: &str,
    annotation: &str,
    errors: &mut Vec<SchemaBuildError>,
) -> Option<TypeAnnotation> {
    match TypeAnnotation::parse(annotation, loc::SourceLocation::Schema) {
        Ok(type_annotation) => Some(type_annotation),
        Err(err) => {
            errors.push(SchemaBuildError::InvalidTypeAnnotation {
                owner: owner.to_string(),
                annotation: annotation.to_string(),
                reason: err.message().to_string(),
            });
            None
        },
    }
}

fn build_input_value(
    owner: &str,
    spec: &InputValueSpec,
    errors: &mut Vec<SchemaBuildError>,
) -> Option<(TypeAnnotation, Option<SuppliedValue>)> {
    let type_annotation = parse_annotation(owner, &spec.type_annotation, errors)?;
    let default_value = match &spec.default_value {
        None => None,
        Some(text) => match SuppliedValue::parse_const(text) {
            Ok(value) => Some(value),
            Err(err) => {
                errors.push(SchemaBuildError::InvalidDefaultValue {
                    owner: owner.to_string(),
                    default_value: text.clone(),
                    reason: err.message().to_string(),
                });
                return None;
            },
        },
    };
    Some((type_annotation, default_value))
}

fn build_parameters(
    owner: &str,
    specs: Vec<InputValueSpec>,
    errors: &mut Vec<SchemaBuildError>,
) -> IndexMap<String, Parameter> {
    let mut parameters = IndexMap::with_capacity(specs.len());
    for spec in specs {
        if parameters.contains_key(&spec.name) {
            errors.push(SchemaBuildError::DuplicateParameterName {
                owner: owner.to_string(),
                parameter_name: spec.name,
            });
            continue;
        }
        let param_owner = format!("{owner}({}:)", spec.name);
        if let Some((type_annotation, default_value)) = build_input_value(&param_owner, &spec, errors) {
            parameters.insert(spec.name.clone(), Parameter {
                def_location: loc::SourceLocation::Schema,
                default_value,
                name: spec.name,
                type_annotation,
            });
        }
    }
    parameters
}

fn build_field(
    type_name: &str,
    builder: FieldBuilder,
    errors: &mut Vec<SchemaBuildError>,
) -> Option<Field> {
    let owner = format!("{type_name}.{}", builder.name);
    if builder.name.starts_with("__") {
        errors.push(SchemaBuildError::ReservedName { name: owner });
        return None;
    }
    let type_annotation = parse_annotation(&owner, &builder.type_annotation, errors)?;
    let parameters = build_parameters(&owner, builder.arguments, errors);
    Some(Field {
        cost: builder.cost,
        def_location: loc::SourceLocation::Schema,
        is_virtual: builder.is_virtual,
        name: builder.name,
        parameters,
        parent_type_name: type_name.to_string(),
        type_annotation,
    })
}

fn build_object_or_interface_data(
    builder: ObjectTypeBuilder,
    errors: &mut Vec<SchemaBuildError>,
) -> ObjectOrInterfaceTypeData {
    let name = builder.name;
    if builder.fields.is_empty() {
        errors.push(SchemaBuildError::EmptyType { type_name: name.clone() });
    }
    let mut fields = IndexMap::with_capacity(builder.fields.len());
    for field_builder in builder.fields {
        if fields.contains_key(&field_builder.name) {
            errors.push(SchemaBuildError::DuplicateFieldName {
                type_name: name.clone(),
                field_name: field_builder.name,
            });
            continue;
        }
        if let Some(field) = build_field(&name, field_builder, errors) {
            fields.insert(field.name.clone(), field);
        }
    }
    ObjectOrInterfaceTypeData {
        def_location: loc::SourceLocation::Schema,
        fields,
        interfaces: builder.interfaces
            .iter()
            .map(|iface| NamedGraphQLTypeRef::new(iface, loc::SourceLocation::Schema))
            .collect(),
        name,
    }
}

/// Every referenced type exists and is usable where it is referenced.
fn validate_type_references(
    types: &IndexMap<String, GraphQLType>,
    directives: &IndexMap<String, Directive>,
    errors: &mut Vec<SchemaBuildError>,
) {
    let check_input = |owner: String, annot: &TypeAnnotation, errors: &mut Vec<SchemaBuildError>| {
        let type_name = annot.innermost_named_type_annotation().graphql_type_name();
        match types.get(type_name) {
            None => errors.push(SchemaBuildError::UndefinedTypeReference {
                owner,
                type_name: type_name.to_string(),
            }),
            Some(type_) if !type_.is_input_type() => {
                errors.push(SchemaBuildError::NonInputParameterType {
                    owner,
                    type_name: type_name.to_string(),
                });
            },
            Some(_) => (),
        }
    };

    for (type_name, type_) in types {
        match type_ {
            GraphQLType::Object(ObjectType(data)) | GraphQLType::Interface(InterfaceType(data)) => {
                for iface_name in data.interface_names() {
                    match types.get(iface_name) {
                        Some(GraphQLType::Interface(_)) => (),
                        Some(_) => errors.push(SchemaBuildError::ImplementsNonInterface {
                            type_name: type_name.clone(),
                            interface_name: iface_name.to_string(),
                        }),
                        None => errors.push(SchemaBuildError::UndefinedTypeReference {
                            owner: type_name.clone(),
                            type_name: iface_name.to_string(),
                        }),
                    }
                }
                for (field_name, field) in &data.fields {
                    let owner = format!("{type_name}.{field_name}");
                    let return_name = field.type_annotation
                        .innermost_named_type_annotation()
                        .graphql_type_name();
                    match types.get(return_name) {
                        None => errors.push(SchemaBuildError::UndefinedTypeReference {
                            owner: owner.clone(),
                            type_name: return_name.to_string(),
                        }),
                        Some(return_type) if !return_type.is_output_type() => {
                            errors.push(SchemaBuildError::NonOutputFieldType {
                                owner: owner.clone(),
                                type_name: return_name.to_string(),
                            });
                        },
                        Some(_) => (),
                    }
                    for (param_name, param) in &field.parameters {
                        check_input(format!("{owner}({param_name}:)"), &param.type_annotation, errors);
                    }
                }
            },
            GraphQLType::Union(union_type) => {
                for member_name in union_type.member_type_names() {
                    match types.get(member_name) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(_) => errors.push(SchemaBuildError::UnionMemberNotObject {
                            union_name: type_name.clone(),
                            member_name: member_name.to_string(),
                        }),
                        None => errors.push(SchemaBuildError::UndefinedTypeReference {
                            owner: type_name.clone(),
                            type_name: member_name.to_string(),
                        }),
                    }
                }
            },
            GraphQLType::InputObject(input_type) => {
                for (field_name, field) in input_type.fields() {
                    check_input(format!("{type_name}.{field_name}"), &field.type_annotation, errors);
                }
            },
            _ => (),
        }
    }

    for (directive_name, directive) in directives {
        for (param_name, param) in &directive.parameters {
            check_input(format!("@{directive_name}({param_name}:)"), &param.type_annotation, errors);
        }
    }
}

fn resolve_root_types(
    types: &IndexMap<String, GraphQLType>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    errors: &mut Vec<SchemaBuildError>,
) -> (String, Option<String>, Option<String>) {
    let mut check = |operation: OperationKind, type_name: &str| match types.get(type_name) {
        Some(GraphQLType::Object(_)) => true,
        Some(_) => {
            errors.push(SchemaBuildError::RootTypeNotObject {
                operation,
                type_name: type_name.to_string(),
            });
            false
        },
        None => {
            errors.push(SchemaBuildError::UndefinedRootType {
                operation,
                type_name: type_name.to_string(),
            });
            false
        },
    };

    let query_type = query_type.unwrap_or_else(|| "Query".to_string());
    check(OperationKind::Query, &query_type);

    let mut optional_root = |operation: OperationKind, explicit: Option<String>, implicit: &str| {
        match explicit {
            Some(type_name) => check(operation, &type_name).then_some(type_name),
            None => matches!(types.get(implicit), Some(GraphQLType::Object(_)))
                .then(|| implicit.to_string()),
        }
    };
    let mutation_type = optional_root(OperationKind::Mutation, mutation_type, "Mutation");
    let subscription_type =
        optional_root(OperationKind::Subscription, subscription_type, "Subscription");

    (query_type, mutation_type, subscription_type)
}

fn compute_possible_types(types: &IndexMap<String, GraphQLType>) -> HashMap<String, Vec<String>> {
    let mut possible_types: HashMap<String, Vec<String>> = HashMap::new();
    for (type_name, type_) in types {
        match type_ {
            GraphQLType::Object(obj) => {
                possible_types.entry(type_name.clone()).or_default().push(type_name.clone());
                for iface_name in obj.interface_names() {
                    possible_types
                        .entry(iface_name.to_string())
                        .or_default()
                        .push(type_name.clone());
                }
            },
            GraphQLType::Interface(_) => {
                possible_types.entry(type_name.clone()).or_default();
            },
            GraphQLType::Union(union_type) => {
                possible_types.insert(
                    type_name.clone(),
                    union_type.member_type_names().into_iter().map(str::to_string).collect(),
                );
            },
            _ => (),
        }
    }
    possible_types
}

/// Each implementing type declares every interface field with a covariant
/// return type and the same parameters; extra parameters must be optional.
fn validate_interface_implementations(schema: &Schema, errors: &mut Vec<SchemaBuildError>) {
    for (type_name, type_) in &schema.types {
        let data = match type_ {
            GraphQLType::Object(ObjectType(data)) | GraphQLType::Interface(InterfaceType(data)) => data,
            _ => continue,
        };
        for iface in data.interfaces(schema) {
            for (field_name, iface_field) in iface.fields() {
                let incompatible = |reason: String| SchemaBuildError::IncompatibleInterfaceField {
                    type_name: type_name.clone(),
                    interface_name: iface.name().to_string(),
                    field_name: field_name.clone(),
                    reason,
                };
                let Some(field) = data.fields.get(field_name) else {
                    errors.push(SchemaBuildError::MissingInterfaceField {
                        type_name: type_name.clone(),
                        interface_name: iface.name().to_string(),
                        field_name: field_name.clone(),
                    });
                    continue;
                };
                if !field.type_annotation.is_subtype_of(schema, &iface_field.type_annotation) {
                    errors.push(incompatible(format!(
                        "`{}` is not a subtype of `{}`",
                        field.type_annotation,
                        iface_field.type_annotation,
                    )));
                }
                for (param_name, iface_param) in iface_field.parameters() {
                    match field.parameter(param_name) {
                        Some(param) if param.type_annotation.is_equivalent_to(&iface_param.type_annotation) => (),
                        Some(param) => errors.push(incompatible(format!(
                            "parameter `{param_name}` is `{}` instead of `{}`",
                            param.type_annotation,
                            iface_param.type_annotation,
                        ))),
                        None => errors.push(incompatible(format!(
                            "parameter `{param_name}` is missing",
                        ))),
                    }
                }
                for (param_name, param) in field.parameters() {
                    if iface_field.parameter(param_name).is_none() && param.is_required() {
                        errors.push(incompatible(format!(
                            "additional parameter `{param_name}` must be optional",
                        )));
                    }
                }
            }
        }
    }
}

fn validate_default_values(schema: &Schema, errors: &mut Vec<SchemaBuildError>) {
    let coercer = ValueCoercer::new(schema);
    let mut check = |owner: String, default: Option<&SuppliedValue>, annot: &TypeAnnotation| {
        if let Some(default) = default
            && let Err(err) = coercer.coerce_supplied(default, annot)
        {
            errors.push(SchemaBuildError::InvalidDefaultValue {
                owner,
                default_value: default.to_string(),
                reason: err.to_string(),
            });
        }
    };

    for (type_name, type_) in &schema.types {
        match type_ {
            GraphQLType::Object(ObjectType(data)) | GraphQLType::Interface(InterfaceType(data)) => {
                for (field_name, field) in &data.fields {
                    for (param_name, param) in &field.parameters {
                        check(
                            format!("{type_name}.{field_name}({param_name}:)"),
                            param.default_value(),
                            &param.type_annotation,
                        );
                    }
                }
            },
            GraphQLType::InputObject(input_type) => {
                for (field_name, field) in input_type.fields() {
                    check(
                        format!("{type_name}.{field_name}"),
                        field.default_value(),
                        &field.type_annotation,
                    );
                }
            },
            _ => (),
        }
    }
    for (directive_name, directive) in &schema.directives {
        for (param_name, param) in &directive.parameters {
            check(
                format!("@{directive_name}({param_name}:)"),
                param.default_value(),
                &param.type_annotation,
            );
        }
    }
}
