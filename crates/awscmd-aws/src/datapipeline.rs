//! AWS Data Pipeline operations.
//!
//! AWS JSON 1.1 protocol with target prefix `DataPipeline`. List calls page
//! with `marker` and flag the last page with `hasMoreResults: false`.
//!
//! Reference: <https://docs.aws.amazon.com/datapipeline/latest/APIReference/>

use awscmd_core::{DefaultSelect, Operation, OperationDescriptor, Paginated, Protocol, ServiceSpec};
use serde::{Deserialize, Serialize};

pub const SERVICE: &ServiceSpec = &ServiceSpec {
    name: "AWS Data Pipeline",
    endpoint_prefix: "datapipeline",
    signing_name: "datapipeline",
    protocol: Protocol::AwsJson {
        target_prefix: "DataPipeline",
    },
};

// ── Types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A key-value pair on a pipeline object. Exactly one of `string_value` /
/// `ref_value` is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ParameterAttribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineIdName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operator {
    /// `EQ`, `REF_EQ`, `LE`, `GE` or `BETWEEN`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<Selector>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// Input for calls that only name a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineIdInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
}

/// `marker` is only meaningful while `hasMoreResults` is not `false`.
fn continuation<'a>(marker: &'a Option<String>, has_more_results: Option<bool>) -> Option<&'a str> {
    if has_more_results == Some(false) {
        return None;
    }
    marker.as_deref()
}

// ── CreatePipeline ──────────────────────────────────────────────────────

pub struct CreatePipeline;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePipelineOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
}

impl Operation for CreatePipeline {
    type Input = CreatePipelineInput;
    type Output = CreatePipelineOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("CreatePipeline")
        .inputs(&["name", "uniqueId", "description", "tags"])
        .required(&["name", "uniqueId"])
        .outputs(&["pipelineId"])
        .select(DefaultSelect::Field("pipelineId"))
        .pass_thru("name");
}

// ── DeletePipeline ──────────────────────────────────────────────────────

pub struct DeletePipeline;

impl Operation for DeletePipeline {
    type Input = PipelineIdInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DeletePipeline")
        .inputs(&["pipelineId"])
        .required(&["pipelineId"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId")
        .confirm("pipelineId");
}

// ── ActivatePipeline / DeactivatePipeline ───────────────────────────────

pub struct ActivatePipeline;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePipelineInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<ParameterValue>>,
    /// Epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<f64>,
}

impl Operation for ActivatePipeline {
    type Input = ActivatePipelineInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("ActivatePipeline")
        .inputs(&["pipelineId", "parameterValues", "startTimestamp"])
        .required(&["pipelineId"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId");
}

pub struct DeactivatePipeline;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivatePipelineInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_active: Option<bool>,
}

impl Operation for DeactivatePipeline {
    type Input = DeactivatePipelineInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DeactivatePipeline")
        .inputs(&["pipelineId", "cancelActive"])
        .required(&["pipelineId"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId");
}

// ── DescribePipelines ───────────────────────────────────────────────────

pub struct DescribePipelines;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePipelinesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribePipelinesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_description_list: Option<Vec<PipelineDescription>>,
}

impl Operation for DescribePipelines {
    type Input = DescribePipelinesInput;
    type Output = DescribePipelinesOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DescribePipelines")
        .inputs(&["pipelineIds"])
        .required(&["pipelineIds"])
        .outputs(&["pipelineDescriptionList"])
        .select(DefaultSelect::Field("pipelineDescriptionList"));
}

// ── ListPipelines ───────────────────────────────────────────────────────

pub struct ListPipelines;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPipelinesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPipelinesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id_list: Option<Vec<PipelineIdName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more_results: Option<bool>,
}

impl Operation for ListPipelines {
    type Input = ListPipelinesInput;
    type Output = ListPipelinesOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("ListPipelines")
        .inputs(&["marker"])
        .outputs(&["pipelineIdList", "marker", "hasMoreResults"])
        .select(DefaultSelect::Field("pipelineIdList"));
}

impl Paginated for ListPipelines {
    fn token(input: &Self::Input) -> Option<&str> {
        input.marker.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.marker = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        continuation(&output.marker, output.has_more_results)
    }
}

// ── GetPipelineDefinition ───────────────────────────────────────────────

pub struct GetPipelineDefinition;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPipelineDefinitionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    /// `active` or `latest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPipelineDefinitionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_objects: Option<Vec<PipelineObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_objects: Option<Vec<ParameterObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<ParameterValue>>,
}

impl Operation for GetPipelineDefinition {
    type Input = GetPipelineDefinitionInput;
    type Output = GetPipelineDefinitionOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("GetPipelineDefinition")
        .inputs(&["pipelineId", "version"])
        .required(&["pipelineId"])
        .outputs(&["pipelineObjects", "parameterObjects", "parameterValues"])
        .select(DefaultSelect::Whole)
        .pass_thru("pipelineId");
}

// ── PutPipelineDefinition / ValidatePipelineDefinition ──────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDefinitionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_objects: Option<Vec<PipelineObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_objects: Option<Vec<ParameterObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<ParameterValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineDefinitionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_warnings: Option<Vec<ValidationMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errored: Option<bool>,
}

const DEFINITION_INPUTS: &[&str] = &[
    "pipelineId",
    "pipelineObjects",
    "parameterObjects",
    "parameterValues",
];
const DEFINITION_OUTPUTS: &[&str] = &["validationErrors", "validationWarnings", "errored"];

pub struct PutPipelineDefinition;

impl Operation for PutPipelineDefinition {
    type Input = PipelineDefinitionInput;
    type Output = PipelineDefinitionOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("PutPipelineDefinition")
        .inputs(DEFINITION_INPUTS)
        .required(&["pipelineId", "pipelineObjects"])
        .outputs(DEFINITION_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("pipelineId");
}

pub struct ValidatePipelineDefinition;

impl Operation for ValidatePipelineDefinition {
    type Input = PipelineDefinitionInput;
    type Output = PipelineDefinitionOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("ValidatePipelineDefinition")
        .inputs(DEFINITION_INPUTS)
        .required(&["pipelineId", "pipelineObjects"])
        .outputs(DEFINITION_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("pipelineId");
}

// ── DescribeObjects ─────────────────────────────────────────────────────

pub struct DescribeObjects;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeObjectsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluate_expressions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeObjectsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_objects: Option<Vec<PipelineObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more_results: Option<bool>,
}

impl Operation for DescribeObjects {
    type Input = DescribeObjectsInput;
    type Output = DescribeObjectsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DescribeObjects")
        .inputs(&["pipelineId", "objectIds", "evaluateExpressions", "marker"])
        .required(&["pipelineId", "objectIds"])
        .outputs(&["pipelineObjects", "marker", "hasMoreResults"])
        .select(DefaultSelect::Field("pipelineObjects"))
        .pass_thru("pipelineId");
}

impl Paginated for DescribeObjects {
    fn token(input: &Self::Input) -> Option<&str> {
        input.marker.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.marker = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        continuation(&output.marker, output.has_more_results)
    }
}

// ── QueryObjects ────────────────────────────────────────────────────────

pub struct QueryObjects;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryObjectsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// `COMPONENT`, `INSTANCE` or `ATTEMPT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryObjectsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more_results: Option<bool>,
}

impl Operation for QueryObjects {
    type Input = QueryObjectsInput;
    type Output = QueryObjectsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("QueryObjects")
        .inputs(&["pipelineId", "query", "sphere", "marker", "limit"])
        .required(&["pipelineId", "sphere"])
        .outputs(&["ids", "marker", "hasMoreResults"])
        .select(DefaultSelect::Field("ids"))
        .pass_thru("pipelineId");
}

impl Paginated for QueryObjects {
    fn token(input: &Self::Input) -> Option<&str> {
        input.marker.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.marker = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        continuation(&output.marker, output.has_more_results)
    }
}

// ── AddTags / RemoveTags ────────────────────────────────────────────────

pub struct AddTags;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTagsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Operation for AddTags {
    type Input = AddTagsInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("AddTags")
        .inputs(&["pipelineId", "tags"])
        .required(&["pipelineId", "tags"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId");
}

pub struct RemoveTags;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTagsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl Operation for RemoveTags {
    type Input = RemoveTagsInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("RemoveTags")
        .inputs(&["pipelineId", "tagKeys"])
        .required(&["pipelineId", "tagKeys"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId")
        .confirm("pipelineId");
}

// ── SetStatus ───────────────────────────────────────────────────────────

pub struct SetStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ids: Option<Vec<String>>,
    /// `PAUSE`/`RESUME` for components, `TRY_CANCEL`/`RERUN`/`MARK_FINISHED`
    /// for instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Operation for SetStatus {
    type Input = SetStatusInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("SetStatus")
        .inputs(&["pipelineId", "objectIds", "status"])
        .required(&["pipelineId", "objectIds", "status"])
        .select(DefaultSelect::Nothing)
        .pass_thru("pipelineId");
}

// ── EvaluateExpression ──────────────────────────────────────────────────

pub struct EvaluateExpression;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateExpressionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluateExpressionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_expression: Option<String>,
}

impl Operation for EvaluateExpression {
    type Input = EvaluateExpressionInput;
    type Output = EvaluateExpressionOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("EvaluateExpression")
        .inputs(&["pipelineId", "objectId", "expression"])
        .required(&["pipelineId", "objectId", "expression"])
        .outputs(&["evaluatedExpression"])
        .select(DefaultSelect::Field("evaluatedExpression"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::WireRequest;
    use serde_json::json;

    #[test]
    fn target_header_uses_service_prefix() {
        let body = serde_json::to_value(PipelineIdInput {
            pipeline_id: Some("df-123".into()),
        })
        .unwrap();
        let request = WireRequest::build(&DeletePipeline::DESCRIPTOR, &body).unwrap();
        assert_eq!(request.headers["x-amz-target"], "DataPipeline.DeletePipeline");
        assert_eq!(request.body, r#"{"pipelineId":"df-123"}"#);
    }

    #[test]
    fn marker_is_ignored_without_more_results() {
        let output: ListPipelinesOutput = serde_json::from_value(json!({
            "pipelineIdList": [{"id": "df-1", "name": "a"}],
            "marker": "m1",
            "hasMoreResults": false
        }))
        .unwrap();
        assert_eq!(ListPipelines::next_token(&output), None);

        let output: ListPipelinesOutput = serde_json::from_value(json!({
            "pipelineIdList": [],
            "marker": "m1",
            "hasMoreResults": true
        }))
        .unwrap();
        assert_eq!(ListPipelines::next_token(&output), Some("m1"));
    }

    #[test]
    fn marker_without_flag_continues() {
        let output = QueryObjectsOutput {
            ids: Some(vec!["a".into()]),
            marker: Some("m2".into()),
            has_more_results: None,
        };
        assert_eq!(QueryObjects::next_token(&output), Some("m2"));
    }

    #[test]
    fn operator_type_is_renamed() {
        let query = Query {
            selectors: Some(vec![Selector {
                field_name: Some("@status".into()),
                operator: Some(Operator {
                    kind: Some("EQ".into()),
                    values: Some(vec!["FAILED".into()]),
                }),
            }]),
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"selectors": [{"fieldName": "@status", "operator": {"type": "EQ", "values": ["FAILED"]}}]})
        );
    }

    #[test]
    fn pipeline_objects_decode_from_document() {
        let objects: Vec<PipelineObject> = serde_json::from_str(
            r#"[{"id":"Default","name":"Default","fields":[{"key":"scheduleType","stringValue":"ondemand"}]}]"#,
        )
        .unwrap();
        let fields = objects[0].fields.as_ref().unwrap();
        assert_eq!(fields[0].string_value.as_deref(), Some("ondemand"));
        assert!(fields[0].ref_value.is_none());
    }
}
