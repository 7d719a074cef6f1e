//! S3 Vectors commands (noun prefix `S3V`).

use super::{json_arg, opt_json_arg, text_arg};
use crate::runtime::Runtime;
use anyhow::Result;
use awscmd_aws::s3vectors::*;
use awscmd_core::{collection, nested, Envelope, Transport};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum S3VectorsCommand {
    /// Create a vector bucket
    #[command(name = "New-S3VVectorBucket")]
    CreateVectorBucket(CreateVectorBucketArgs),
    /// Describe a vector bucket
    #[command(name = "Get-S3VVectorBucket")]
    GetVectorBucket(BucketArgs),
    /// Delete an empty vector bucket
    #[command(name = "Remove-S3VVectorBucket")]
    DeleteVectorBucket(BucketArgs),
    /// List vector buckets
    #[command(name = "Get-S3VVectorBucketList")]
    ListVectorBuckets(ListVectorBucketsArgs),
    /// Create a vector index
    #[command(name = "New-S3VIndex")]
    CreateIndex(CreateIndexArgs),
    /// Describe a vector index
    #[command(name = "Get-S3VIndex")]
    GetIndex(IndexArgs),
    /// Delete a vector index
    #[command(name = "Remove-S3VIndex")]
    DeleteIndex(IndexArgs),
    /// List the indexes in a vector bucket
    #[command(name = "Get-S3VIndexList")]
    ListIndexes(ListIndexesArgs),
    /// Add or overwrite vectors in an index
    #[command(name = "Write-S3VVector")]
    PutVectors(PutVectorsArgs),
    /// Retrieve vectors by key
    #[command(name = "Get-S3VVector")]
    GetVectors(GetVectorsArgs),
    /// List the vectors in an index
    #[command(name = "Get-S3VVectorList")]
    ListVectors(ListVectorsArgs),
    /// Delete vectors by key
    #[command(name = "Remove-S3VVector")]
    DeleteVectors(DeleteVectorsArgs),
    /// Find the nearest neighbours of a query vector
    #[command(name = "Search-S3VVector")]
    QueryVectors(QueryVectorsArgs),
    /// Retrieve a vector bucket's policy
    #[command(name = "Get-S3VVectorBucketPolicy")]
    GetVectorBucketPolicy(BucketArgs),
    /// Attach a policy to a vector bucket
    #[command(name = "Write-S3VVectorBucketPolicy")]
    PutVectorBucketPolicy(PutVectorBucketPolicyArgs),
    /// Delete a vector bucket's policy
    #[command(name = "Remove-S3VVectorBucketPolicy")]
    DeleteVectorBucketPolicy(BucketArgs),
}

impl S3VectorsCommand {
    pub async fn run<T: Transport>(self, rt: &Runtime<T>) -> Result<Vec<Envelope>> {
        Ok(match self {
            Self::CreateVectorBucket(a) => rt.execute::<CreateVectorBucket>(a.into_input()).await,
            Self::GetVectorBucket(a) => rt.execute::<GetVectorBucket>(a.into_input()).await,
            Self::DeleteVectorBucket(a) => rt.execute::<DeleteVectorBucket>(a.into_input()).await,
            Self::ListVectorBuckets(a) => {
                rt.execute_paged::<ListVectorBuckets>(a.into_input()).await
            }
            Self::CreateIndex(a) => rt.execute::<CreateIndex>(a.into_input()).await,
            Self::GetIndex(a) => rt.execute::<GetIndex>(a.into_input()).await,
            Self::DeleteIndex(a) => rt.execute::<DeleteIndex>(a.into_input()).await,
            Self::ListIndexes(a) => rt.execute_paged::<ListIndexes>(a.into_input()).await,
            Self::PutVectors(a) => rt.execute::<PutVectors>(a.into_input()?).await,
            Self::GetVectors(a) => rt.execute::<GetVectors>(a.into_input()).await,
            Self::ListVectors(a) => rt.execute_paged::<ListVectors>(a.into_input()).await,
            Self::DeleteVectors(a) => rt.execute::<DeleteVectors>(a.into_input()).await,
            Self::QueryVectors(a) => rt.execute::<QueryVectors>(a.into_input()?).await,
            Self::GetVectorBucketPolicy(a) => {
                rt.execute::<GetVectorBucketPolicy>(a.into_input()).await
            }
            Self::PutVectorBucketPolicy(a) => {
                rt.execute::<PutVectorBucketPolicy>(a.into_input()?).await
            }
            Self::DeleteVectorBucketPolicy(a) => {
                rt.execute::<DeleteVectorBucketPolicy>(a.into_input()).await
            }
        })
    }
}

// ── Arguments ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct BucketArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    #[arg(long)]
    pub vector_bucket_arn: Option<String>,
}

impl BucketArgs {
    fn into_input(self) -> BucketInput {
        BucketInput {
            vector_bucket_name: self.vector_bucket_name,
            vector_bucket_arn: self.vector_bucket_arn,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct IndexArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    #[arg(long)]
    pub index_name: Option<String>,
    #[arg(long)]
    pub index_arn: Option<String>,
}

impl IndexArgs {
    fn into_input(self) -> IndexInput {
        IndexInput {
            vector_bucket_name: self.vector_bucket_name,
            index_name: self.index_name,
            index_arn: self.index_arn,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateVectorBucketArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    /// `AES256` or `aws:kms`
    #[arg(long = "encryption-configuration.sse-type")]
    pub sse_type: Option<String>,
    #[arg(long = "encryption-configuration.kms-key-arn")]
    pub kms_key_arn: Option<String>,
}

impl CreateVectorBucketArgs {
    fn into_input(self) -> CreateVectorBucketInput {
        CreateVectorBucketInput {
            vector_bucket_name: self.vector_bucket_name,
            encryption_configuration: nested(EncryptionConfiguration {
                sse_type: self.sse_type,
                kms_key_arn: self.kms_key_arn,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListVectorBucketsArgs {
    #[arg(long)]
    pub max_results: Option<i32>,
    /// Start from this token; fetches a single page
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ListVectorBucketsArgs {
    fn into_input(self) -> ListVectorBucketsInput {
        ListVectorBucketsInput {
            max_results: self.max_results,
            next_token: self.next_token,
            prefix: self.prefix,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateIndexArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    #[arg(long)]
    pub vector_bucket_arn: Option<String>,
    #[arg(long)]
    pub index_name: Option<String>,
    /// `float32`
    #[arg(long)]
    pub data_type: Option<String>,
    #[arg(long)]
    pub dimension: Option<i32>,
    /// `euclidean` or `cosine`
    #[arg(long)]
    pub distance_metric: Option<String>,
    /// Metadata key that cannot be filtered on, repeatable
    #[arg(long = "metadata-configuration.non-filterable-metadata-key")]
    pub non_filterable_metadata_keys: Vec<String>,
}

impl CreateIndexArgs {
    fn into_input(self) -> CreateIndexInput {
        CreateIndexInput {
            vector_bucket_name: self.vector_bucket_name,
            vector_bucket_arn: self.vector_bucket_arn,
            index_name: self.index_name,
            data_type: self.data_type,
            dimension: self.dimension,
            distance_metric: self.distance_metric,
            metadata_configuration: nested(MetadataConfiguration {
                non_filterable_metadata_keys: collection(self.non_filterable_metadata_keys),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListIndexesArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    #[arg(long)]
    pub vector_bucket_arn: Option<String>,
    #[arg(long)]
    pub max_results: Option<i32>,
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ListIndexesArgs {
    fn into_input(self) -> ListIndexesInput {
        ListIndexesInput {
            vector_bucket_name: self.vector_bucket_name,
            vector_bucket_arn: self.vector_bucket_arn,
            max_results: self.max_results,
            next_token: self.next_token,
            prefix: self.prefix,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PutVectorsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
    /// JSON list of {"key", "data": {"float32": [...]}, "metadata"},
    /// inline or file://path
    #[arg(long)]
    pub vectors: Option<String>,
}

impl PutVectorsArgs {
    fn into_input(self) -> Result<PutVectorsInput> {
        Ok(PutVectorsInput {
            vector_bucket_name: self.index.vector_bucket_name,
            index_name: self.index.index_name,
            index_arn: self.index.index_arn,
            vectors: opt_json_arg("vectors", self.vectors)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GetVectorsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
    /// Vector key, repeatable
    #[arg(long = "key")]
    pub keys: Vec<String>,
    #[arg(long)]
    pub return_data: Option<bool>,
    #[arg(long)]
    pub return_metadata: Option<bool>,
}

impl GetVectorsArgs {
    fn into_input(self) -> GetVectorsInput {
        GetVectorsInput {
            vector_bucket_name: self.index.vector_bucket_name,
            index_name: self.index.index_name,
            index_arn: self.index.index_arn,
            keys: collection(self.keys),
            return_data: self.return_data,
            return_metadata: self.return_metadata,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListVectorsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
    #[arg(long)]
    pub max_results: Option<i32>,
    #[arg(long)]
    pub next_token: Option<String>,
    #[arg(long)]
    pub segment_count: Option<i32>,
    #[arg(long)]
    pub segment_index: Option<i32>,
    #[arg(long)]
    pub return_data: Option<bool>,
    #[arg(long)]
    pub return_metadata: Option<bool>,
}

impl ListVectorsArgs {
    fn into_input(self) -> ListVectorsInput {
        ListVectorsInput {
            vector_bucket_name: self.index.vector_bucket_name,
            index_name: self.index.index_name,
            index_arn: self.index.index_arn,
            max_results: self.max_results,
            next_token: self.next_token,
            segment_count: self.segment_count,
            segment_index: self.segment_index,
            return_data: self.return_data,
            return_metadata: self.return_metadata,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DeleteVectorsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
    /// Vector key, repeatable
    #[arg(long = "key")]
    pub keys: Vec<String>,
}

impl DeleteVectorsArgs {
    fn into_input(self) -> DeleteVectorsInput {
        DeleteVectorsInput {
            vector_bucket_name: self.index.vector_bucket_name,
            index_name: self.index.index_name,
            index_arn: self.index.index_arn,
            keys: collection(self.keys),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct QueryVectorsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
    #[arg(long)]
    pub top_k: Option<i32>,
    /// Comma-separated float32 components
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub query_vector: Vec<f32>,
    /// Metadata filter document, inline or file://path
    #[arg(long)]
    pub filter: Option<String>,
    #[arg(long)]
    pub return_metadata: Option<bool>,
    #[arg(long)]
    pub return_distance: Option<bool>,
}

impl QueryVectorsArgs {
    fn into_input(self) -> Result<QueryVectorsInput> {
        Ok(QueryVectorsInput {
            vector_bucket_name: self.index.vector_bucket_name,
            index_name: self.index.index_name,
            index_arn: self.index.index_arn,
            top_k: self.top_k,
            query_vector: collection(self.query_vector).map(|components| VectorData {
                float32: Some(components),
            }),
            filter: self.filter.map(|raw| json_arg("filter", raw)).transpose()?,
            return_metadata: self.return_metadata,
            return_distance: self.return_distance,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PutVectorBucketPolicyArgs {
    #[arg(long)]
    pub vector_bucket_name: Option<String>,
    #[arg(long)]
    pub vector_bucket_arn: Option<String>,
    /// Policy document, inline or file://path
    #[arg(long)]
    pub policy: Option<String>,
}

impl PutVectorBucketPolicyArgs {
    fn into_input(self) -> Result<PutVectorBucketPolicyInput> {
        Ok(PutVectorBucketPolicyInput {
            vector_bucket_name: self.vector_bucket_name,
            vector_bucket_arn: self.vector_bucket_arn,
            policy: self.policy.map(text_arg).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_encryption_is_omitted() {
        let input = CreateVectorBucketArgs {
            vector_bucket_name: Some("b".into()),
            ..Default::default()
        }
        .into_input();
        assert!(input.encryption_configuration.is_none());
    }

    #[test]
    fn query_vector_and_filter() {
        let input = QueryVectorsArgs {
            top_k: Some(3),
            query_vector: vec![0.25, -1.0],
            filter: Some(r#"{"genre": {"$eq": "jazz"}}"#.into()),
            ..Default::default()
        }
        .into_input()
        .unwrap();
        assert_eq!(input.query_vector.unwrap().float32, Some(vec![0.25, -1.0]));
        assert_eq!(input.filter, Some(json!({"genre": {"$eq": "jazz"}})));
    }

    #[test]
    fn empty_query_vector_is_unset() {
        let input = QueryVectorsArgs::default().into_input().unwrap();
        assert!(input.query_vector.is_none());
    }

    #[test]
    fn vectors_document_is_parsed() {
        let input = PutVectorsArgs {
            vectors: Some(r#"[{"key": "k1", "data": {"float32": [1.0]}}]"#.into()),
            ..Default::default()
        }
        .into_input()
        .unwrap();
        assert_eq!(input.vectors.unwrap()[0].key.as_deref(), Some("k1"));
    }
}
