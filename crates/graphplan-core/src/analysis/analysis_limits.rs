use crate::analysis::OperationMetrics;
use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::MessageCode;

/// Admission thresholds. An unset limit is not enforced.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisLimits {
    pub max_complexity: Option<f64>,
    pub max_depth: Option<usize>,
}
impl AnalysisLimits {
    pub fn check(
        &self,
        metrics: &OperationMetrics,
        location: Option<DocumentPosition>,
    ) -> Vec<DocumentMessage> {
        let mut messages = vec![];
        if let Some(max_depth) = self.max_depth
            && metrics.depth() > max_depth
        {
            messages.push(
                DocumentMessage::error(
                    MessageCode::MaxDepthExceeded,
                    format!(
                        "operation depth {} exceeds the maximum of {max_depth}",
                        metrics.depth(),
                    ),
                ).at_optional(location),
            );
        }
        if let Some(max_complexity) = self.max_complexity
            && metrics.complexity() > max_complexity
        {
            messages.push(
                DocumentMessage::error(
                    MessageCode::MaxComplexityExceeded,
                    format!(
                        "operation complexity {} exceeds the maximum of {max_complexity}",
                        metrics.complexity(),
                    ),
                ).at_optional(location),
            );
        }
        messages
    }
}
