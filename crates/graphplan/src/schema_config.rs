//! The TOML file the CLI reads: planning limits plus a description of the
//! schema to check documents against.

use anyhow::Context;
use graphplan_core::analysis::AnalysisLimits;
use graphplan_core::analysis::ComplexityConfig;
use graphplan_core::plan::PlanConfig;
use graphplan_core::schema::DirectiveBuilder;
use graphplan_core::schema::FieldBuilder;
use graphplan_core::schema::InputObjectTypeBuilder;
use graphplan_core::schema::InterfaceTypeBuilder;
use graphplan_core::schema::ObjectTypeBuilder;
use graphplan_core::schema::Schema;
use graphplan_core::schema::SchemaBuilder;
use graphplan_core::types::DirectiveLocation;
use indexmap::IndexMap;
use std::path::Path;

fn default_inject_typename() -> bool {
    true
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub complexity: ComplexityConfig,
    #[serde(default = "default_inject_typename")]
    pub inject_typename: bool,
    #[serde(default)]
    pub limits: AnalysisLimits,
    pub schema: SchemaConfig,
}
impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::debug!(
            "loaded config from {}: {} object type(s)",
            path.display(),
            config.schema.objects.len(),
        );
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn plan_config(&self) -> PlanConfig {
        PlanConfig {
            complexity: self.complexity.clone(),
            inject_typename: self.inject_typename,
            limits: self.limits.clone(),
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SchemaConfig {
    pub directives: IndexMap<String, DirectiveConfig>,
    pub enums: IndexMap<String, Vec<String>>,
    pub input_objects: IndexMap<String, IndexMap<String, String>>,
    pub interfaces: IndexMap<String, ObjectConfig>,
    pub mutation: Option<String>,
    pub objects: IndexMap<String, ObjectConfig>,
    pub query: Option<String>,
    pub scalars: Vec<String>,
    pub subscription: Option<String>,
    pub unions: IndexMap<String, Vec<String>>,
}
impl SchemaConfig {
    pub fn build(&self) -> anyhow::Result<Schema> {
        let mut builder = SchemaBuilder::new();
        if let Some(query) = &self.query {
            builder = builder.query_type(query);
        }
        if let Some(mutation) = &self.mutation {
            builder = builder.mutation_type(mutation);
        }
        if let Some(subscription) = &self.subscription {
            builder = builder.subscription_type(subscription);
        }
        for scalar in &self.scalars {
            builder = builder.scalar(scalar);
        }
        for (name, values) in &self.enums {
            builder = builder.enum_type(name, values);
        }
        for (name, members) in &self.unions {
            builder = builder.union(name, members);
        }
        for (name, interface) in &self.interfaces {
            let mut type_builder = InterfaceTypeBuilder::new(name);
            for interface_name in &interface.implements {
                type_builder = type_builder.implements(interface_name);
            }
            for (field_name, field) in &interface.fields {
                type_builder = type_builder.field(field.to_builder(field_name));
            }
            builder = builder.interface(type_builder);
        }
        for (name, object) in &self.objects {
            let mut type_builder = ObjectTypeBuilder::new(name);
            for interface_name in &object.implements {
                type_builder = type_builder.implements(interface_name);
            }
            for (field_name, field) in &object.fields {
                type_builder = type_builder.field(field.to_builder(field_name));
            }
            builder = builder.object(type_builder);
        }
        for (name, fields) in &self.input_objects {
            let mut type_builder = InputObjectTypeBuilder::new(name);
            for (field_name, spec) in fields {
                type_builder = match split_input_value(spec) {
                    (type_annotation, Some(default)) => {
                        type_builder.field_with_default(field_name, type_annotation, default)
                    },
                    (type_annotation, None) => type_builder.field(field_name, type_annotation),
                };
            }
            builder = builder.input_object(type_builder);
        }
        for (name, directive) in &self.directives {
            builder = builder.directive(directive.to_builder(name)?);
        }

        builder.build().map_err(|errors| {
            let lines = errors
                .iter()
                .map(|err| format!("  * {err}"))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::anyhow!("schema has {} error(s):\n{lines}", errors.len())
        })
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ObjectConfig {
    pub fields: IndexMap<String, FieldConfig>,
    pub implements: Vec<String>,
}

/// A field is either its type annotation alone, or a table.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum FieldConfig {
    Type(String),
    Detailed(DetailedFieldConfig),
}
impl FieldConfig {
    fn to_builder(&self, name: &str) -> FieldBuilder {
        let detailed = match self {
            Self::Type(type_annotation) => return FieldBuilder::new(name, type_annotation),
            Self::Detailed(detailed) => detailed,
        };
        let mut builder = FieldBuilder::new(name, &detailed.type_annotation);
        for (arg_name, spec) in &detailed.args {
            builder = match split_input_value(spec) {
                (type_annotation, Some(default)) => {
                    builder.arg_with_default(arg_name, type_annotation, default)
                },
                (type_annotation, None) => builder.arg(arg_name, type_annotation),
            };
        }
        if let Some(cost) = detailed.cost {
            builder = builder.cost(cost);
        }
        if detailed.is_virtual {
            builder = builder.virtual_field();
        }
        builder
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DetailedFieldConfig {
    #[serde(default)]
    pub args: IndexMap<String, String>,
    pub cost: Option<f64>,
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DirectiveConfig {
    pub args: IndexMap<String, String>,
    pub locations: Vec<String>,
    pub repeatable: bool,
}
impl DirectiveConfig {
    fn to_builder(&self, name: &str) -> anyhow::Result<DirectiveBuilder> {
        let mut builder = DirectiveBuilder::new(name);
        for location in &self.locations {
            builder = builder.location(parse_directive_location(location).with_context(|| {
                format!("directive `@{name}`")
            })?);
        }
        for (arg_name, spec) in &self.args {
            builder = match split_input_value(spec) {
                (type_annotation, Some(default)) => {
                    builder.arg_with_default(arg_name, type_annotation, default)
                },
                (type_annotation, None) => builder.arg(arg_name, type_annotation),
            };
        }
        if self.repeatable {
            builder = builder.repeatable();
        }
        Ok(builder)
    }
}

/// `"Int = 10"` declares a default; `"Int"` does not.
pub(crate) fn split_input_value(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('=') {
        Some((type_annotation, default)) => (type_annotation.trim(), Some(default.trim())),
        None => (spec.trim(), None),
    }
}

fn parse_directive_location(name: &str) -> anyhow::Result<DirectiveLocation> {
    Ok(match name {
        "FIELD" => DirectiveLocation::Field,
        "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
        "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
        "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
        "MUTATION" => DirectiveLocation::Mutation,
        "QUERY" => DirectiveLocation::Query,
        "SUBSCRIPTION" => DirectiveLocation::Subscription,
        "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
        other => anyhow::bail!("unknown executable directive location `{other}`"),
    })
}
