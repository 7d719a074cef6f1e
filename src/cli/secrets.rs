//! Secrets Manager commands (noun prefix `SEC`).

use super::{blob_arg, key_value, opt_json_arg, text_arg};
use crate::runtime::Runtime;
use anyhow::Result;
use awscmd_aws::secrets::*;
use awscmd_core::{collection, idempotency_token, nested, Envelope, Transport};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum SecretsCommand {
    /// Retrieve the contents of a secret version
    #[command(name = "Get-SECSecretValue")]
    GetSecretValue(GetSecretValueArgs),
    /// Create a secret
    #[command(name = "New-SECSecret")]
    CreateSecret(CreateSecretArgs),
    /// Modify a secret's details or value
    #[command(name = "Update-SECSecret")]
    UpdateSecret(UpdateSecretArgs),
    /// Store a new version of a secret's value
    #[command(name = "Write-SECSecretValue")]
    PutSecretValue(PutSecretValueArgs),
    /// Schedule a secret for deletion
    #[command(name = "Remove-SECSecret")]
    DeleteSecret(DeleteSecretArgs),
    /// Cancel the scheduled deletion of a secret
    #[command(name = "Restore-SECSecret")]
    RestoreSecret(SecretIdArgs),
    /// List the secrets in the account
    #[command(name = "Get-SECSecretList")]
    ListSecrets(ListSecretsArgs),
    /// Describe a secret without its value
    #[command(name = "Get-SECSecret")]
    DescribeSecret(SecretIdArgs),
    /// Configure and start rotation of a secret
    #[command(name = "Invoke-SECSecretRotation")]
    RotateSecret(RotateSecretArgs),
    /// Turn off automatic rotation for a secret
    #[command(name = "Stop-SECSecretRotation")]
    CancelRotateSecret(SecretIdArgs),
    /// Attach tags to a secret
    #[command(name = "Add-SECResourceTag")]
    TagResource(TagResourceArgs),
    /// Remove tags from a secret
    #[command(name = "Remove-SECResourceTag")]
    UntagResource(UntagResourceArgs),
    /// List the versions of a secret
    #[command(name = "Get-SECSecretVersionIdList")]
    ListSecretVersionIds(ListSecretVersionIdsArgs),
    /// Generate a random password
    #[command(name = "Get-SECRandomPassword")]
    GetRandomPassword(GetRandomPasswordArgs),
    /// Retrieve the resource policy attached to a secret
    #[command(name = "Get-SECResourcePolicy")]
    GetResourcePolicy(SecretIdArgs),
    /// Attach a resource policy to a secret
    #[command(name = "Write-SECResourcePolicy")]
    PutResourcePolicy(PutResourcePolicyArgs),
    /// Delete the resource policy attached to a secret
    #[command(name = "Remove-SECResourcePolicy")]
    DeleteResourcePolicy(SecretIdArgs),
    /// Retrieve the values of several secrets at once
    #[command(name = "Get-SECSecretValueBatch")]
    BatchGetSecretValue(BatchGetSecretValueArgs),
    /// Move a staging label between secret versions
    #[command(name = "Update-SECSecretVersionStage")]
    UpdateSecretVersionStage(UpdateSecretVersionStageArgs),
}

impl SecretsCommand {
    pub async fn run<T: Transport>(self, rt: &Runtime<T>) -> Result<Vec<Envelope>> {
        Ok(match self {
            Self::GetSecretValue(a) => rt.execute::<GetSecretValue>(a.into_input()).await,
            Self::CreateSecret(a) => rt.execute::<CreateSecret>(a.into_input()?).await,
            Self::UpdateSecret(a) => rt.execute::<UpdateSecret>(a.into_input()?).await,
            Self::PutSecretValue(a) => rt.execute::<PutSecretValue>(a.into_input()?).await,
            Self::DeleteSecret(a) => rt.execute::<DeleteSecret>(a.into_input()).await,
            Self::RestoreSecret(a) => rt.execute::<RestoreSecret>(a.into_input()).await,
            Self::ListSecrets(a) => rt.execute_paged::<ListSecrets>(a.into_input()?).await,
            Self::DescribeSecret(a) => rt.execute::<DescribeSecret>(a.into_input()).await,
            Self::RotateSecret(a) => rt.execute::<RotateSecret>(a.into_input()).await,
            Self::CancelRotateSecret(a) => rt.execute::<CancelRotateSecret>(a.into_input()).await,
            Self::TagResource(a) => rt.execute::<TagResource>(a.into_input()).await,
            Self::UntagResource(a) => rt.execute::<UntagResource>(a.into_input()).await,
            Self::ListSecretVersionIds(a) => {
                rt.execute_paged::<ListSecretVersionIds>(a.into_input()).await
            }
            Self::GetRandomPassword(a) => rt.execute::<GetRandomPassword>(a.into_input()).await,
            Self::GetResourcePolicy(a) => rt.execute::<GetResourcePolicy>(a.into_input()).await,
            Self::PutResourcePolicy(a) => rt.execute::<PutResourcePolicy>(a.into_input()?).await,
            Self::DeleteResourcePolicy(a) => {
                rt.execute::<DeleteResourcePolicy>(a.into_input()).await
            }
            Self::BatchGetSecretValue(a) => {
                rt.execute_paged::<BatchGetSecretValue>(a.into_input()?).await
            }
            Self::UpdateSecretVersionStage(a) => {
                rt.execute::<UpdateSecretVersionStage>(a.into_input()).await
            }
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

/// `--secret-string` (inline or `file://`) and `--secret-binary PATH`.
#[derive(Debug, Clone, Default, Args)]
pub struct SecretPayloadArgs {
    /// Secret text, inline or file://path
    #[arg(long)]
    pub secret_string: Option<String>,
    /// File whose bytes become the secret
    #[arg(long, value_name = "PATH")]
    pub secret_binary: Option<PathBuf>,
}

impl SecretPayloadArgs {
    fn resolve(self) -> Result<(Option<String>, Option<String>)> {
        let string = self.secret_string.map(text_arg).transpose()?;
        let binary = self.secret_binary.as_deref().map(blob_arg).transpose()?;
        Ok((string, binary))
    }
}

// ── Arguments ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct SecretIdArgs {
    /// ARN or name of the secret
    #[arg(long)]
    pub secret_id: Option<String>,
}

impl SecretIdArgs {
    fn into_input(self) -> SecretIdInput {
        SecretIdInput {
            secret_id: self.secret_id,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GetSecretValueArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    #[arg(long)]
    pub version_id: Option<String>,
    #[arg(long)]
    pub version_stage: Option<String>,
}

impl GetSecretValueArgs {
    fn into_input(self) -> GetSecretValueInput {
        GetSecretValueInput {
            secret_id: self.secret_id,
            version_id: self.version_id,
            version_stage: self.version_stage,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateSecretArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_request_token: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub kms_key_id: Option<String>,
    #[command(flatten)]
    pub payload: SecretPayloadArgs,
    /// Tag as Key=Value, repeatable
    #[arg(long = "tag", value_parser = key_value)]
    pub tags: Vec<(String, String)>,
    /// Replica regions as a JSON list of {"Region", "KmsKeyId"}
    #[arg(long)]
    pub add_replica_regions: Option<String>,
    #[arg(long)]
    pub force_overwrite_replica_secret: Option<bool>,
}

impl CreateSecretArgs {
    fn into_input(self) -> Result<CreateSecretInput> {
        let (secret_string, secret_binary) = self.payload.resolve()?;
        Ok(CreateSecretInput {
            name: self.name,
            client_request_token: idempotency_token(self.client_request_token),
            description: self.description,
            kms_key_id: self.kms_key_id,
            secret_binary,
            secret_string,
            tags: tags(self.tags),
            add_replica_regions: opt_json_arg("add-replica-regions", self.add_replica_regions)?,
            force_overwrite_replica_secret: self.force_overwrite_replica_secret,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateSecretArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_request_token: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub kms_key_id: Option<String>,
    #[command(flatten)]
    pub payload: SecretPayloadArgs,
}

impl UpdateSecretArgs {
    fn into_input(self) -> Result<UpdateSecretInput> {
        let (secret_string, secret_binary) = self.payload.resolve()?;
        let has_value = secret_string.is_some() || secret_binary.is_some();
        Ok(UpdateSecretInput {
            secret_id: self.secret_id,
            // A token only means something when a new version is created.
            client_request_token: if has_value {
                idempotency_token(self.client_request_token)
            } else {
                self.client_request_token
            },
            description: self.description,
            kms_key_id: self.kms_key_id,
            secret_binary,
            secret_string,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PutSecretValueArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_request_token: Option<String>,
    #[command(flatten)]
    pub payload: SecretPayloadArgs,
    /// Staging label to attach, repeatable
    #[arg(long = "version-stage")]
    pub version_stages: Vec<String>,
    #[arg(long)]
    pub rotation_token: Option<String>,
}

impl PutSecretValueArgs {
    fn into_input(self) -> Result<PutSecretValueInput> {
        let (secret_string, secret_binary) = self.payload.resolve()?;
        Ok(PutSecretValueInput {
            secret_id: self.secret_id,
            client_request_token: idempotency_token(self.client_request_token),
            secret_binary,
            secret_string,
            version_stages: collection(self.version_stages),
            rotation_token: self.rotation_token,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DeleteSecretArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Days before the secret is deleted (7-30)
    #[arg(long)]
    pub recovery_window_in_days: Option<i64>,
    #[arg(long)]
    pub force_delete_without_recovery: Option<bool>,
}

impl DeleteSecretArgs {
    fn into_input(self) -> DeleteSecretInput {
        DeleteSecretInput {
            secret_id: self.secret_id,
            recovery_window_in_days: self.recovery_window_in_days,
            force_delete_without_recovery: self.force_delete_without_recovery,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListSecretsArgs {
    #[arg(long)]
    pub include_planned_deletion: Option<bool>,
    #[arg(long)]
    pub max_results: Option<i32>,
    /// Start from this token; fetches a single page
    #[arg(long)]
    pub next_token: Option<String>,
    /// Filters as a JSON list of {"Key", "Values"}
    #[arg(long)]
    pub filters: Option<String>,
    /// `asc` or `desc`
    #[arg(long)]
    pub sort_order: Option<String>,
}

impl ListSecretsArgs {
    fn into_input(self) -> Result<ListSecretsInput> {
        Ok(ListSecretsInput {
            include_planned_deletion: self.include_planned_deletion,
            max_results: self.max_results,
            next_token: self.next_token,
            filters: opt_json_arg("filters", self.filters)?,
            sort_order: self.sort_order,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RotateSecretArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_request_token: Option<String>,
    #[arg(long)]
    pub rotation_lambda_arn: Option<String>,
    #[arg(long = "rotation-rules.automatically-after-days")]
    pub automatically_after_days: Option<i64>,
    #[arg(long = "rotation-rules.duration")]
    pub duration: Option<String>,
    #[arg(long = "rotation-rules.schedule-expression")]
    pub schedule_expression: Option<String>,
    #[arg(long)]
    pub rotate_immediately: Option<bool>,
}

impl RotateSecretArgs {
    fn into_input(self) -> RotateSecretInput {
        RotateSecretInput {
            secret_id: self.secret_id,
            client_request_token: idempotency_token(self.client_request_token),
            rotation_lambda_arn: self.rotation_lambda_arn,
            rotation_rules: nested(RotationRules {
                automatically_after_days: self.automatically_after_days,
                duration: self.duration,
                schedule_expression: self.schedule_expression,
            }),
            rotate_immediately: self.rotate_immediately,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TagResourceArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Tag as Key=Value, repeatable
    #[arg(long = "tag", value_parser = key_value)]
    pub tags: Vec<(String, String)>,
}

impl TagResourceArgs {
    fn into_input(self) -> TagResourceInput {
        TagResourceInput {
            secret_id: self.secret_id,
            tags: tags(self.tags),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UntagResourceArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Tag key to remove, repeatable
    #[arg(long = "tag-key")]
    pub tag_keys: Vec<String>,
}

impl UntagResourceArgs {
    fn into_input(self) -> UntagResourceInput {
        UntagResourceInput {
            secret_id: self.secret_id,
            tag_keys: collection(self.tag_keys),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListSecretVersionIdsArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    #[arg(long)]
    pub max_results: Option<i32>,
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub include_deprecated: Option<bool>,
}

impl ListSecretVersionIdsArgs {
    fn into_input(self) -> ListSecretVersionIdsInput {
        ListSecretVersionIdsInput {
            secret_id: self.secret_id,
            max_results: self.max_results,
            next_token: self.next_token,
            include_deprecated: self.include_deprecated,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GetRandomPasswordArgs {
    #[arg(long)]
    pub password_length: Option<i64>,
    #[arg(long)]
    pub exclude_characters: Option<String>,
    #[arg(long)]
    pub exclude_numbers: Option<bool>,
    #[arg(long)]
    pub exclude_punctuation: Option<bool>,
    #[arg(long)]
    pub exclude_uppercase: Option<bool>,
    #[arg(long)]
    pub exclude_lowercase: Option<bool>,
    #[arg(long)]
    pub include_space: Option<bool>,
    #[arg(long)]
    pub require_each_included_type: Option<bool>,
}

impl GetRandomPasswordArgs {
    fn into_input(self) -> GetRandomPasswordInput {
        GetRandomPasswordInput {
            password_length: self.password_length,
            exclude_characters: self.exclude_characters,
            exclude_numbers: self.exclude_numbers,
            exclude_punctuation: self.exclude_punctuation,
            exclude_uppercase: self.exclude_uppercase,
            exclude_lowercase: self.exclude_lowercase,
            include_space: self.include_space,
            require_each_included_type: self.require_each_included_type,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PutResourcePolicyArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    /// Policy document, inline or file://path
    #[arg(long)]
    pub resource_policy: Option<String>,
    #[arg(long)]
    pub block_public_policy: Option<bool>,
}

impl PutResourcePolicyArgs {
    fn into_input(self) -> Result<PutResourcePolicyInput> {
        Ok(PutResourcePolicyInput {
            secret_id: self.secret_id,
            resource_policy: self.resource_policy.map(text_arg).transpose()?,
            block_public_policy: self.block_public_policy,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BatchGetSecretValueArgs {
    /// Secret to fetch, repeatable
    #[arg(long = "secret-id")]
    pub secret_id_list: Vec<String>,
    /// Filters as a JSON list of {"Key", "Values"}
    #[arg(long)]
    pub filters: Option<String>,
    #[arg(long)]
    pub max_results: Option<i32>,
    #[arg(long)]
    pub next_token: Option<String>,
}

impl BatchGetSecretValueArgs {
    fn into_input(self) -> Result<BatchGetSecretValueInput> {
        Ok(BatchGetSecretValueInput {
            secret_id_list: collection(self.secret_id_list),
            filters: opt_json_arg("filters", self.filters)?,
            max_results: self.max_results,
            next_token: self.next_token,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateSecretVersionStageArgs {
    #[arg(long)]
    pub secret_id: Option<String>,
    #[arg(long)]
    pub version_stage: Option<String>,
    #[arg(long)]
    pub move_to_version_id: Option<String>,
    #[arg(long)]
    pub remove_from_version_id: Option<String>,
}

impl UpdateSecretVersionStageArgs {
    fn into_input(self) -> UpdateSecretVersionStageInput {
        UpdateSecretVersionStageInput {
            secret_id: self.secret_id,
            version_stage: self.version_stage,
            move_to_version_id: self.move_to_version_id,
            remove_from_version_id: self.remove_from_version_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_mints_request_token() {
        let input = CreateSecretArgs {
            name: Some("prod/db".into()),
            payload: SecretPayloadArgs {
                secret_string: Some("hunter2".into()),
                secret_binary: None,
            },
            tags: vec![("team".into(), "data".into())],
            ..Default::default()
        }
        .into_input()
        .unwrap();
        assert_eq!(input.client_request_token.as_ref().map(String::len), Some(36));
        assert_eq!(input.secret_string.as_deref(), Some("hunter2"));
        let tags = input.tags.unwrap();
        assert_eq!(tags[0].key.as_deref(), Some("team"));
    }

    #[test]
    fn update_without_value_sends_no_token() {
        let input = UpdateSecretArgs {
            secret_id: Some("s".into()),
            description: Some("new".into()),
            ..Default::default()
        }
        .into_input()
        .unwrap();
        assert!(input.client_request_token.is_none());
    }

    #[test]
    fn rotation_rules_only_when_given() {
        let input = RotateSecretArgs {
            secret_id: Some("s".into()),
            ..Default::default()
        }
        .into_input();
        assert!(input.rotation_rules.is_none());

        let input = RotateSecretArgs {
            secret_id: Some("s".into()),
            schedule_expression: Some("rate(10 days)".into()),
            ..Default::default()
        }
        .into_input();
        assert_eq!(
            input.rotation_rules.unwrap().schedule_expression.as_deref(),
            Some("rate(10 days)")
        );
    }

    #[test]
    fn filters_parse_from_json() {
        let input = ListSecretsArgs {
            filters: Some(r#"[{"Key":"name","Values":["prod"]}]"#.into()),
            ..Default::default()
        }
        .into_input()
        .unwrap();
        let filters = input.filters.unwrap();
        assert_eq!(filters[0].key.as_deref(), Some("name"));
        assert_eq!(filters[0].values.as_deref(), Some(&["prod".to_string()][..]));
    }

    #[test]
    fn empty_tag_list_is_omitted() {
        let input = UntagResourceArgs {
            secret_id: Some("s".into()),
            tag_keys: vec![],
        }
        .into_input();
        assert!(input.tag_keys.is_none());
    }
}
