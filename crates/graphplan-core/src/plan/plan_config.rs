use crate::analysis::AnalysisLimits;
use crate::analysis::ComplexityConfig;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    pub complexity: ComplexityConfig,
    /// Add a `__typename` invocation under abstract-typed fields that do not
    /// select one, so the executor can tell concrete types apart.
    pub inject_typename: bool,
    pub limits: AnalysisLimits,
}
impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            complexity: ComplexityConfig::default(),
            inject_typename: true,
            limits: AnalysisLimits::default(),
        }
    }
}
