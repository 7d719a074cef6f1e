//! AWS Secrets Manager operations.
//!
//! AWS JSON 1.1 protocol with target prefix `secretsmanager`.
//!
//! Reference: <https://docs.aws.amazon.com/secretsmanager/latest/apireference/>

use awscmd_core::{DefaultSelect, Nested, Operation, OperationDescriptor, Paginated, Protocol, ServiceSpec};
use serde::{Deserialize, Serialize};

pub const SERVICE: &ServiceSpec = &ServiceSpec {
    name: "AWS Secrets Manager",
    endpoint_prefix: "secretsmanager",
    signing_name: "secretsmanager",
    protocol: Protocol::AwsJson {
        target_prefix: "secretsmanager",
    },
};

// ── Types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Filter {
    /// One of `description`, `name`, `tag-key`, `tag-value`,
    /// `primary-region`, `owning-service`, `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RotationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatically_after_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
}

impl Nested for RotationRules {
    fn is_unset(&self) -> bool {
        self.automatically_after_days.is_none()
            && self.duration.is_none()
            && self.schedule_expression.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplicaRegionType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplicationStatusType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_date: Option<f64>,
}

/// Secret listing entry (ListSecrets, DescribeSecret).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretListEntry {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_enabled: Option<bool>,
    #[serde(rename = "RotationLambdaARN", skip_serializing_if = "Option::is_none")]
    pub rotation_lambda_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_rules: Option<RotationRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_rotated_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_rotation_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_versions_to_stages: Option<std::collections::BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretVersionsListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretValueEntry {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    /// Base64-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiErrorType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The `ARN` / `Name` / `VersionId` triple most mutating calls return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretRef {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

/// Input for the calls that take nothing but a secret id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecretIdInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
}

// ── GetSecretValue ──────────────────────────────────────────────────────

pub struct GetSecretValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSecretValueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stage: Option<String>,
}

impl Operation for GetSecretValue {
    type Input = GetSecretValueInput;
    type Output = SecretValueEntry;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("GetSecretValue")
        .inputs(&["SecretId", "VersionId", "VersionStage"])
        .required(&["SecretId"])
        .outputs(&[
            "ARN",
            "Name",
            "VersionId",
            "SecretBinary",
            "SecretString",
            "VersionStages",
            "CreatedDate",
        ])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── CreateSecret ────────────────────────────────────────────────────────

pub struct CreateSecret;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecretInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_replica_regions: Option<Vec<ReplicaRegionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_overwrite_replica_secret: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSecretOutput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_status: Option<Vec<ReplicationStatusType>>,
}

impl Operation for CreateSecret {
    type Input = CreateSecretInput;
    type Output = CreateSecretOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("CreateSecret")
        .inputs(&[
            "Name",
            "ClientRequestToken",
            "Description",
            "KmsKeyId",
            "SecretBinary",
            "SecretString",
            "Tags",
            "AddReplicaRegions",
            "ForceOverwriteReplicaSecret",
        ])
        .required(&["Name"])
        .outputs(&["ARN", "Name", "VersionId", "ReplicationStatus"])
        .select(DefaultSelect::Whole)
        .pass_thru("Name");
}

// ── UpdateSecret ────────────────────────────────────────────────────────

pub struct UpdateSecret;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSecretInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<String>,
}

impl Operation for UpdateSecret {
    type Input = UpdateSecretInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("UpdateSecret")
        .inputs(&[
            "SecretId",
            "ClientRequestToken",
            "Description",
            "KmsKeyId",
            "SecretBinary",
            "SecretString",
        ])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "VersionId"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── PutSecretValue ──────────────────────────────────────────────────────

pub struct PutSecretValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutSecretValueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutSecretValueOutput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stages: Option<Vec<String>>,
}

impl Operation for PutSecretValue {
    type Input = PutSecretValueInput;
    type Output = PutSecretValueOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("PutSecretValue")
        .inputs(&[
            "SecretId",
            "ClientRequestToken",
            "SecretBinary",
            "SecretString",
            "VersionStages",
            "RotationToken",
        ])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "VersionId", "VersionStages"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── DeleteSecret ────────────────────────────────────────────────────────

pub struct DeleteSecret;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSecretInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_window_in_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_delete_without_recovery: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSecretOutput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<f64>,
}

impl Operation for DeleteSecret {
    type Input = DeleteSecretInput;
    type Output = DeleteSecretOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DeleteSecret")
        .inputs(&["SecretId", "RecoveryWindowInDays", "ForceDeleteWithoutRecovery"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "DeletionDate"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId")
        .confirm("SecretId");
}

// ── RestoreSecret ───────────────────────────────────────────────────────

pub struct RestoreSecret;

impl Operation for RestoreSecret {
    type Input = SecretIdInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("RestoreSecret")
        .inputs(&["SecretId"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── ListSecrets ─────────────────────────────────────────────────────────

pub struct ListSecrets;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecretsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_planned_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListSecretsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_list: Option<Vec<SecretListEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Operation for ListSecrets {
    type Input = ListSecretsInput;
    type Output = ListSecretsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("ListSecrets")
        .inputs(&[
            "IncludePlannedDeletion",
            "MaxResults",
            "NextToken",
            "Filters",
            "SortOrder",
        ])
        .outputs(&["SecretList", "NextToken"])
        .select(DefaultSelect::Field("SecretList"));
}

impl Paginated for ListSecrets {
    fn token(input: &Self::Input) -> Option<&str> {
        input.next_token.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.next_token = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token.as_deref()
    }
}

// ── DescribeSecret ──────────────────────────────────────────────────────

pub struct DescribeSecret;

impl Operation for DescribeSecret {
    type Input = SecretIdInput;
    type Output = SecretListEntry;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DescribeSecret")
        .inputs(&["SecretId"])
        .required(&["SecretId"])
        .outputs(&[
            "ARN",
            "Name",
            "Description",
            "KmsKeyId",
            "RotationEnabled",
            "RotationLambdaARN",
            "RotationRules",
            "LastRotatedDate",
            "LastChangedDate",
            "LastAccessedDate",
            "DeletedDate",
            "NextRotationDate",
            "Tags",
            "SecretVersionsToStages",
            "OwningService",
            "CreatedDate",
            "PrimaryRegion",
        ])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── RotateSecret ────────────────────────────────────────────────────────

pub struct RotateSecret;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RotateSecretInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(rename = "RotationLambdaARN", skip_serializing_if = "Option::is_none")]
    pub rotation_lambda_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_rules: Option<RotationRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_immediately: Option<bool>,
}

impl Operation for RotateSecret {
    type Input = RotateSecretInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("RotateSecret")
        .inputs(&[
            "SecretId",
            "ClientRequestToken",
            "RotationLambdaARN",
            "RotationRules.AutomaticallyAfterDays",
            "RotationRules.Duration",
            "RotationRules.ScheduleExpression",
            "RotateImmediately",
        ])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "VersionId"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

// ── CancelRotateSecret ──────────────────────────────────────────────────

pub struct CancelRotateSecret;

impl Operation for CancelRotateSecret {
    type Input = SecretIdInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("CancelRotateSecret")
        .inputs(&["SecretId"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "VersionId"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId")
        .confirm("SecretId");
}

// ── TagResource / UntagResource ─────────────────────────────────────────

pub struct TagResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Operations that return no payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

impl Operation for TagResource {
    type Input = TagResourceInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("TagResource")
        .inputs(&["SecretId", "Tags"])
        .required(&["SecretId", "Tags"])
        .select(DefaultSelect::Nothing)
        .pass_thru("SecretId");
}

pub struct UntagResource;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl Operation for UntagResource {
    type Input = UntagResourceInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("UntagResource")
        .inputs(&["SecretId", "TagKeys"])
        .required(&["SecretId", "TagKeys"])
        .select(DefaultSelect::Nothing)
        .pass_thru("SecretId")
        .confirm("SecretId");
}

// ── ListSecretVersionIds ────────────────────────────────────────────────

pub struct ListSecretVersionIds;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecretVersionIdsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deprecated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListSecretVersionIdsOutput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<SecretVersionsListEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Operation for ListSecretVersionIds {
    type Input = ListSecretVersionIdsInput;
    type Output = ListSecretVersionIdsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("ListSecretVersionIds")
        .inputs(&["SecretId", "MaxResults", "NextToken", "IncludeDeprecated"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "Versions", "NextToken"])
        .select(DefaultSelect::Field("Versions"))
        .pass_thru("SecretId");
}

impl Paginated for ListSecretVersionIds {
    fn token(input: &Self::Input) -> Option<&str> {
        input.next_token.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.next_token = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token.as_deref()
    }
}

// ── GetRandomPassword ───────────────────────────────────────────────────

pub struct GetRandomPassword;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRandomPasswordInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_space: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_each_included_type: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRandomPasswordOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_password: Option<String>,
}

impl Operation for GetRandomPassword {
    type Input = GetRandomPasswordInput;
    type Output = GetRandomPasswordOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("GetRandomPassword")
        .inputs(&[
            "PasswordLength",
            "ExcludeCharacters",
            "ExcludeNumbers",
            "ExcludePunctuation",
            "ExcludeUppercase",
            "ExcludeLowercase",
            "IncludeSpace",
            "RequireEachIncludedType",
        ])
        .outputs(&["RandomPassword"])
        .select(DefaultSelect::Field("RandomPassword"));
}

// ── Resource policies ───────────────────────────────────────────────────

pub struct GetResourcePolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetResourcePolicyOutput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_policy: Option<String>,
}

impl Operation for GetResourcePolicy {
    type Input = SecretIdInput;
    type Output = GetResourcePolicyOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("GetResourcePolicy")
        .inputs(&["SecretId"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name", "ResourcePolicy"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

pub struct PutResourcePolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutResourcePolicyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_public_policy: Option<bool>,
}

impl Operation for PutResourcePolicy {
    type Input = PutResourcePolicyInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("PutResourcePolicy")
        .inputs(&["SecretId", "ResourcePolicy", "BlockPublicPolicy"])
        .required(&["SecretId", "ResourcePolicy"])
        .outputs(&["ARN", "Name"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

pub struct DeleteResourcePolicy;

impl Operation for DeleteResourcePolicy {
    type Input = SecretIdInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("DeleteResourcePolicy")
        .inputs(&["SecretId"])
        .required(&["SecretId"])
        .outputs(&["ARN", "Name"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId")
        .confirm("SecretId");
}

// ── BatchGetSecretValue ─────────────────────────────────────────────────

pub struct BatchGetSecretValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetSecretValueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchGetSecretValueOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_values: Option<Vec<SecretValueEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiErrorType>>,
}

impl Operation for BatchGetSecretValue {
    type Input = BatchGetSecretValueInput;
    type Output = BatchGetSecretValueOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("BatchGetSecretValue")
        .inputs(&["SecretIdList", "Filters", "MaxResults", "NextToken"])
        .outputs(&["SecretValues", "NextToken", "Errors"])
        .select(DefaultSelect::Whole);
}

impl Paginated for BatchGetSecretValue {
    fn token(input: &Self::Input) -> Option<&str> {
        input.next_token.as_deref()
    }

    fn set_token(input: &mut Self::Input, token: Option<String>) {
        input.next_token = token;
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token.as_deref()
    }
}

// ── UpdateSecretVersionStage ────────────────────────────────────────────

pub struct UpdateSecretVersionStage;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSecretVersionStageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_to_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_from_version_id: Option<String>,
}

impl Operation for UpdateSecretVersionStage {
    type Input = UpdateSecretVersionStageInput;
    type Output = SecretRef;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .operation("UpdateSecretVersionStage")
        .inputs(&[
            "SecretId",
            "VersionStage",
            "MoveToVersionId",
            "RemoveFromVersionId",
        ])
        .required(&["SecretId", "VersionStage"])
        .outputs(&["ARN", "Name"])
        .select(DefaultSelect::Whole)
        .pass_thru("SecretId");
}

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::{nested, InvocationContext, InvocationOptions, WireRequest};
    use serde_json::json;

    #[test]
    fn get_secret_value_wire_shape() {
        let input = GetSecretValueInput {
            secret_id: Some("prod/db".into()),
            version_stage: Some("AWSCURRENT".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        let request = WireRequest::build(&GetSecretValue::DESCRIPTOR, &body).unwrap();
        assert_eq!(request.headers["x-amz-target"], "secretsmanager.GetSecretValue");
        assert_eq!(body, json!({"SecretId": "prod/db", "VersionStage": "AWSCURRENT"}));
    }

    #[test]
    fn rotation_rules_absent_when_unset() {
        let input = RotateSecretInput {
            secret_id: Some("prod/db".into()),
            rotation_rules: nested(RotationRules::default()),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("RotationRules").is_none());

        let input = RotateSecretInput {
            secret_id: Some("prod/db".into()),
            rotation_rules: nested(RotationRules {
                automatically_after_days: Some(30),
                ..Default::default()
            }),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["RotationRules"], json!({"AutomaticallyAfterDays": 30}));
    }

    #[test]
    fn explicit_false_is_sent() {
        let input = DeleteSecretInput {
            secret_id: Some("s".into()),
            force_delete_without_recovery: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["ForceDeleteWithoutRecovery"], json!(false));
        assert!(body.get("RecoveryWindowInDays").is_none());
    }

    #[test]
    fn list_entry_decodes_arn_fields() {
        let output: ListSecretsOutput = serde_json::from_value(json!({
            "SecretList": [{
                "ARN": "arn:aws:secretsmanager:us-east-1:123:secret:a",
                "Name": "a",
                "RotationLambdaARN": "arn:aws:lambda:fn",
                "LastChangedDate": 1700000000.5
            }],
            "NextToken": "t1"
        }))
        .unwrap();
        let entry = &output.secret_list.as_ref().unwrap()[0];
        assert_eq!(entry.rotation_lambda_arn.as_deref(), Some("arn:aws:lambda:fn"));
        assert_eq!(ListSecrets::next_token(&output), Some("t1"));

        let back = serde_json::to_value(&output).unwrap();
        assert!(back["SecretList"][0].get("Description").is_none());
    }

    #[test]
    fn required_secret_id_is_checked() {
        let err = InvocationContext::<DescribeSecret>::new(
            SecretIdInput::default(),
            &InvocationOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("SecretId"));
    }

    #[test]
    fn nested_rotation_member_is_selectable_as_param() {
        assert_eq!(
            RotateSecret::DESCRIPTOR.input_param("rotationrules").as_deref(),
            Some("RotationRules")
        );
    }

    #[test]
    fn untag_asks_for_confirmation() {
        let input = UntagResourceInput {
            secret_id: Some("prod/db".into()),
            tag_keys: Some(vec!["env".into()]),
        };
        let ctx = InvocationContext::<UntagResource>::new(input, &InvocationOptions::default())
            .unwrap();
        assert_eq!(ctx.confirmation_target().as_deref(), Some("prod/db"));
    }
}
