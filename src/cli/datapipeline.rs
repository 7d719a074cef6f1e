//! Data Pipeline commands (noun prefix `DP`).

use super::{json_arg, key_value, opt_json_arg, timestamp_arg};
use crate::runtime::Runtime;
use anyhow::Result;
use awscmd_aws::datapipeline::*;
use awscmd_core::{collection, Envelope, Transport};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum DataPipelineCommand {
    /// Create an empty pipeline
    #[command(name = "New-DPPipeline")]
    CreatePipeline(CreatePipelineArgs),
    /// Delete a pipeline and its definition
    #[command(name = "Remove-DPPipeline")]
    DeletePipeline(PipelineIdArgs),
    /// Validate and start a pipeline
    #[command(name = "Enable-DPPipeline")]
    ActivatePipeline(ActivatePipelineArgs),
    /// Stop a running pipeline
    #[command(name = "Disable-DPPipeline")]
    DeactivatePipeline(DeactivatePipelineArgs),
    /// Describe one or more pipelines
    #[command(name = "Get-DPPipeline")]
    DescribePipelines(DescribePipelinesArgs),
    /// List the pipelines in the account
    #[command(name = "Get-DPPipelineList")]
    ListPipelines(ListPipelinesArgs),
    /// Retrieve a pipeline's definition
    #[command(name = "Get-DPPipelineDefinition")]
    GetPipelineDefinition(GetPipelineDefinitionArgs),
    /// Replace a pipeline's definition
    #[command(name = "Write-DPPipelineDefinition")]
    PutPipelineDefinition(PipelineDefinitionArgs),
    /// Check a definition without saving it
    #[command(name = "Test-DPPipelineDefinition")]
    ValidatePipelineDefinition(PipelineDefinitionArgs),
    /// Describe pipeline objects
    #[command(name = "Get-DPObject")]
    DescribeObjects(DescribeObjectsArgs),
    /// Search for pipeline objects
    #[command(name = "Find-DPObject")]
    QueryObjects(QueryObjectsArgs),
    /// Attach tags to a pipeline
    #[command(name = "Add-DPResourceTag")]
    AddTags(AddTagsArgs),
    /// Remove tags from a pipeline
    #[command(name = "Remove-DPResourceTag")]
    RemoveTags(RemoveTagsArgs),
    /// Change the status of pipeline objects
    #[command(name = "Set-DPStatus")]
    SetStatus(SetStatusArgs),
    /// Evaluate an expression in the context of an object
    #[command(name = "Get-DPExpression")]
    EvaluateExpression(EvaluateExpressionArgs),
}

impl DataPipelineCommand {
    pub async fn run<T: Transport>(self, rt: &Runtime<T>) -> Result<Vec<Envelope>> {
        Ok(match self {
            Self::CreatePipeline(a) => rt.execute::<CreatePipeline>(a.into_input()).await,
            Self::DeletePipeline(a) => rt.execute::<DeletePipeline>(a.into_input()).await,
            Self::ActivatePipeline(a) => rt.execute::<ActivatePipeline>(a.into_input()?).await,
            Self::DeactivatePipeline(a) => rt.execute::<DeactivatePipeline>(a.into_input()).await,
            Self::DescribePipelines(a) => rt.execute::<DescribePipelines>(a.into_input()).await,
            Self::ListPipelines(a) => rt.execute_paged::<ListPipelines>(a.into_input()).await,
            Self::GetPipelineDefinition(a) => {
                rt.execute::<GetPipelineDefinition>(a.into_input()).await
            }
            Self::PutPipelineDefinition(a) => {
                rt.execute::<PutPipelineDefinition>(a.into_input()?).await
            }
            Self::ValidatePipelineDefinition(a) => {
                rt.execute::<ValidatePipelineDefinition>(a.into_input()?).await
            }
            Self::DescribeObjects(a) => rt.execute_paged::<DescribeObjects>(a.into_input()).await,
            Self::QueryObjects(a) => rt.execute_paged::<QueryObjects>(a.into_input()?).await,
            Self::AddTags(a) => rt.execute::<AddTags>(a.into_input()).await,
            Self::RemoveTags(a) => rt.execute::<RemoveTags>(a.into_input()).await,
            Self::SetStatus(a) => rt.execute::<SetStatus>(a.into_input()).await,
            Self::EvaluateExpression(a) => rt.execute::<EvaluateExpression>(a.into_input()).await,
        })
    }
}

fn tags(pairs: Vec<(String, String)>) -> Option<Vec<Tag>> {
    collection(
        pairs
            .into_iter()
            .map(|(key, value)| Tag {
                key: Some(key),
                value: Some(value),
            })
            .collect(),
    )
}

// ── Arguments ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct PipelineIdArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
}

impl PipelineIdArgs {
    fn into_input(self) -> PipelineIdInput {
        PipelineIdInput {
            pipeline_id: self.pipeline_id,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreatePipelineArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Caller-chosen identifier that makes the call idempotent
    #[arg(long)]
    pub unique_id: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Tag as Key=Value, repeatable
    #[arg(long = "tag", value_parser = key_value)]
    pub tags: Vec<(String, String)>,
}

impl CreatePipelineArgs {
    fn into_input(self) -> CreatePipelineInput {
        CreatePipelineInput {
            name: self.name,
            unique_id: self.unique_id,
            description: self.description,
            tags: tags(self.tags),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ActivatePipelineArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Parameter value as Id=Value, repeatable
    #[arg(long = "parameter-value", value_parser = key_value)]
    pub parameter_values: Vec<(String, String)>,
    /// RFC 3339 timestamp or epoch seconds
    #[arg(long)]
    pub start_timestamp: Option<String>,
}

impl ActivatePipelineArgs {
    fn into_input(self) -> Result<ActivatePipelineInput> {
        let parameter_values = self
            .parameter_values
            .into_iter()
            .map(|(id, value)| ParameterValue {
                id: Some(id),
                string_value: Some(value),
            })
            .collect();
        Ok(ActivatePipelineInput {
            pipeline_id: self.pipeline_id,
            parameter_values: collection(parameter_values),
            start_timestamp: self.start_timestamp.as_deref().map(timestamp_arg).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DeactivatePipelineArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Cancel running instances (default true)
    #[arg(long)]
    pub cancel_active: Option<bool>,
}

impl DeactivatePipelineArgs {
    fn into_input(self) -> DeactivatePipelineInput {
        DeactivatePipelineInput {
            pipeline_id: self.pipeline_id,
            cancel_active: self.cancel_active,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DescribePipelinesArgs {
    /// Pipeline to describe, repeatable
    #[arg(long = "pipeline-id")]
    pub pipeline_ids: Vec<String>,
}

impl DescribePipelinesArgs {
    fn into_input(self) -> DescribePipelinesInput {
        DescribePipelinesInput {
            pipeline_ids: collection(self.pipeline_ids),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListPipelinesArgs {
    /// Start from this marker; fetches a single page
    #[arg(long, alias = "next-token")]
    pub marker: Option<String>,
}

impl ListPipelinesArgs {
    fn into_input(self) -> ListPipelinesInput {
        ListPipelinesInput {
            marker: self.marker,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GetPipelineDefinitionArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// `active` or `latest`
    #[arg(long)]
    pub version: Option<String>,
}

impl GetPipelineDefinitionArgs {
    fn into_input(self) -> GetPipelineDefinitionInput {
        GetPipelineDefinitionInput {
            pipeline_id: self.pipeline_id,
            version: self.version,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PipelineDefinitionArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// JSON list of pipeline objects, inline or file://path
    #[arg(long)]
    pub pipeline_objects: Option<String>,
    /// JSON list of parameter objects, inline or file://path
    #[arg(long)]
    pub parameter_objects: Option<String>,
    /// JSON list of parameter values, inline or file://path
    #[arg(long)]
    pub parameter_values: Option<String>,
}

impl PipelineDefinitionArgs {
    fn into_input(self) -> Result<PipelineDefinitionInput> {
        Ok(PipelineDefinitionInput {
            pipeline_id: self.pipeline_id,
            pipeline_objects: opt_json_arg("pipeline-objects", self.pipeline_objects)?,
            parameter_objects: opt_json_arg("parameter-objects", self.parameter_objects)?,
            parameter_values: opt_json_arg("parameter-values", self.parameter_values)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DescribeObjectsArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Object to describe, repeatable
    #[arg(long = "object-id")]
    pub object_ids: Vec<String>,
    #[arg(long)]
    pub evaluate_expressions: Option<bool>,
    /// Start from this marker; fetches a single page
    #[arg(long, alias = "next-token")]
    pub marker: Option<String>,
}

impl DescribeObjectsArgs {
    fn into_input(self) -> DescribeObjectsInput {
        DescribeObjectsInput {
            pipeline_id: self.pipeline_id,
            object_ids: collection(self.object_ids),
            evaluate_expressions: self.evaluate_expressions,
            marker: self.marker,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct QueryObjectsArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Query as JSON {"selectors": [...]}, inline or file://path
    #[arg(long)]
    pub query: Option<String>,
    /// `COMPONENT`, `INSTANCE` or `ATTEMPT`
    #[arg(long)]
    pub sphere: Option<String>,
    #[arg(long, alias = "next-token")]
    pub marker: Option<String>,
    #[arg(long)]
    pub limit: Option<i32>,
}

impl QueryObjectsArgs {
    fn into_input(self) -> Result<QueryObjectsInput> {
        Ok(QueryObjectsInput {
            pipeline_id: self.pipeline_id,
            query: self.query.map(|raw| json_arg("query", raw)).transpose()?,
            sphere: self.sphere,
            marker: self.marker,
            limit: self.limit,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct AddTagsArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Tag as Key=Value, repeatable
    #[arg(long = "tag", value_parser = key_value)]
    pub tags: Vec<(String, String)>,
}

impl AddTagsArgs {
    fn into_input(self) -> AddTagsInput {
        AddTagsInput {
            pipeline_id: self.pipeline_id,
            tags: tags(self.tags),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RemoveTagsArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Tag key to remove, repeatable
    #[arg(long = "tag-key")]
    pub tag_keys: Vec<String>,
}

impl RemoveTagsArgs {
    fn into_input(self) -> RemoveTagsInput {
        RemoveTagsInput {
            pipeline_id: self.pipeline_id,
            tag_keys: collection(self.tag_keys),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SetStatusArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    /// Object to update, repeatable
    #[arg(long = "object-id")]
    pub object_ids: Vec<String>,
    #[arg(long)]
    pub status: Option<String>,
}

impl SetStatusArgs {
    fn into_input(self) -> SetStatusInput {
        SetStatusInput {
            pipeline_id: self.pipeline_id,
            object_ids: collection(self.object_ids),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct EvaluateExpressionArgs {
    #[arg(long)]
    pub pipeline_id: Option<String>,
    #[arg(long)]
    pub object_id: Option<String>,
    #[arg(long)]
    pub expression: Option<String>,
}

impl EvaluateExpressionArgs {
    fn into_input(self) -> EvaluateExpressionInput {
        EvaluateExpressionInput {
            pipeline_id: self.pipeline_id,
            object_id: self.object_id,
            expression: self.expression,
        }
    }
}
