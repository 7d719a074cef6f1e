//! Amazon S3 Vectors operations.
//!
//! REST-JSON, every operation a POST to `/<OperationName>` on the
//! `s3vectors.<region>.api.aws` endpoint. Buckets and indexes are addressed
//! either by name or by ARN, so neither is marked required here.
//!
//! Reference: <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_S3_Vectors.html>

use awscmd_core::{DefaultSelect, Nested, Operation, OperationDescriptor, Paginated, Protocol, ServiceSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SERVICE: &ServiceSpec = &ServiceSpec {
    name: "Amazon S3 Vectors",
    endpoint_prefix: "s3vectors",
    signing_name: "s3vectors",
    protocol: Protocol::RestJson,
};

// ── Types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncryptionConfiguration {
    /// `AES256` or `aws:kms`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sse_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
}

impl Nested for EncryptionConfiguration {
    fn is_unset(&self) -> bool {
        self.sse_type.is_none() && self.kms_key_arn.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_filterable_metadata_keys: Option<Vec<String>>,
}

impl Nested for MetadataConfiguration {
    fn is_unset(&self) -> bool {
        self.non_filterable_metadata_keys.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float32: Option<Vec<f32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutInputVector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VectorData>,
    /// Free-form JSON document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputVector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VectorData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Only set by `QueryVectors` with `returnDistance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Index {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_configuration: Option<MetadataConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// Input naming a vector bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
}

/// Input naming an index, either by bucket and index name or by ARN.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
}

const BUCKET_INPUTS: &[&str] = &["vectorBucketName", "vectorBucketArn"];
const INDEX_INPUTS: &[&str] = &["vectorBucketName", "indexName", "indexArn"];

// ── Vector buckets ──────────────────────────────────────────────────────

pub struct CreateVectorBucket;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVectorBucketInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVectorBucketOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
}

impl Operation for CreateVectorBucket {
    type Input = CreateVectorBucketInput;
    type Output = CreateVectorBucketOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateVectorBucket", "/CreateVectorBucket")
        .inputs(&[
            "vectorBucketName",
            "encryptionConfiguration.sseType",
            "encryptionConfiguration.kmsKeyArn",
        ])
        .required(&["vectorBucketName"])
        .outputs(&["vectorBucketArn"])
        .select(DefaultSelect::Whole)
        .pass_thru("vectorBucketName");
}

pub struct GetVectorBucket;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetVectorBucketOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket: Option<VectorBucket>,
}

impl Operation for GetVectorBucket {
    type Input = BucketInput;
    type Output = GetVectorBucketOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("GetVectorBucket", "/GetVectorBucket")
        .inputs(BUCKET_INPUTS)
        .outputs(&["vectorBucket"])
        .select(DefaultSelect::Field("vectorBucket"));
}

pub struct DeleteVectorBucket;

impl Operation for DeleteVectorBucket {
    type Input = BucketInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteVectorBucket", "/DeleteVectorBucket")
        .inputs(BUCKET_INPUTS)
        .select(DefaultSelect::Nothing)
        .pass_thru("vectorBucketName")
        .confirm("vectorBucketName");
}

pub struct ListVectorBuckets;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVectorBucketsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListVectorBucketsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_buckets: Option<Vec<VectorBucket>>,
}

impl Operation for ListVectorBuckets {
    type Input = ListVectorBucketsInput;
    type Output = ListVectorBucketsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("ListVectorBuckets", "/ListVectorBuckets")
        .inputs(&["maxResults", "nextToken", "prefix"])
        .outputs(&["nextToken", "vectorBuckets"])
        .select(DefaultSelect::Field("vectorBuckets"));
}

impl Paginated for ListVectorBuckets {
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

// ── Indexes ─────────────────────────────────────────────────────────────

pub struct CreateIndex;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Only `float32` today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<i32>,
    /// `euclidean` or `cosine`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_configuration: Option<MetadataConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateIndexOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
}

impl Operation for CreateIndex {
    type Input = CreateIndexInput;
    type Output = CreateIndexOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateIndex", "/CreateIndex")
        .inputs(&[
            "vectorBucketName",
            "vectorBucketArn",
            "indexName",
            "dataType",
            "dimension",
            "distanceMetric",
            "metadataConfiguration.nonFilterableMetadataKeys",
        ])
        .required(&["indexName", "dataType", "dimension", "distanceMetric"])
        .outputs(&["indexArn"])
        .select(DefaultSelect::Field("indexArn"))
        .pass_thru("indexName");
}

pub struct GetIndex;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetIndexOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Index>,
}

impl Operation for GetIndex {
    type Input = IndexInput;
    type Output = GetIndexOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("GetIndex", "/GetIndex")
        .inputs(INDEX_INPUTS)
        .outputs(&["index"])
        .select(DefaultSelect::Field("index"));
}

pub struct DeleteIndex;

impl Operation for DeleteIndex {
    type Input = IndexInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteIndex", "/DeleteIndex")
        .inputs(INDEX_INPUTS)
        .select(DefaultSelect::Nothing)
        .pass_thru("indexName")
        .confirm("indexName");
}

pub struct ListIndexes;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIndexesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListIndexesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<Index>>,
}

impl Operation for ListIndexes {
    type Input = ListIndexesInput;
    type Output = ListIndexesOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("ListIndexes", "/ListIndexes")
        .inputs(&["vectorBucketName", "vectorBucketArn", "maxResults", "nextToken", "prefix"])
        .outputs(&["nextToken", "indexes"])
        .select(DefaultSelect::Field("indexes"))
        .pass_thru("vectorBucketName");
}

impl Paginated for ListIndexes {
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

// ── Vectors ─────────────────────────────────────────────────────────────

pub struct PutVectors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutVectorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<PutInputVector>>,
}

impl Operation for PutVectors {
    type Input = PutVectorsInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("PutVectors", "/PutVectors")
        .inputs(&["vectorBucketName", "indexName", "indexArn", "vectors"])
        .required(&["vectors"])
        .select(DefaultSelect::Nothing)
        .pass_thru("indexName");
}

pub struct GetVectors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVectorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_metadata: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<OutputVector>>,
}

impl Operation for GetVectors {
    type Input = GetVectorsInput;
    type Output = VectorsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("GetVectors", "/GetVectors")
        .inputs(&[
            "vectorBucketName",
            "indexName",
            "indexArn",
            "keys",
            "returnData",
            "returnMetadata",
        ])
        .required(&["keys"])
        .outputs(&["vectors"])
        .select(DefaultSelect::Field("vectors"));
}

pub struct ListVectors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVectorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Parallel listing: total number of segments and this caller's slice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_metadata: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListVectorsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<OutputVector>>,
}

impl Operation for ListVectors {
    type Input = ListVectorsInput;
    type Output = ListVectorsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("ListVectors", "/ListVectors")
        .inputs(&[
            "vectorBucketName",
            "indexName",
            "indexArn",
            "maxResults",
            "nextToken",
            "segmentCount",
            "segmentIndex",
            "returnData",
            "returnMetadata",
        ])
        .outputs(&["nextToken", "vectors"])
        .select(DefaultSelect::Field("vectors"))
        .pass_thru("indexName");
}

impl Paginated for ListVectors {
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

pub struct DeleteVectors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVectorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

impl Operation for DeleteVectors {
    type Input = DeleteVectorsInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteVectors", "/DeleteVectors")
        .inputs(&["vectorBucketName", "indexName", "indexArn", "keys"])
        .required(&["keys"])
        .select(DefaultSelect::Nothing)
        .pass_thru("keys")
        .confirm("keys");
}

pub struct QueryVectors;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVectorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_vector: Option<VectorData>,
    /// Metadata filter document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_distance: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryVectorsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<OutputVector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_metric: Option<String>,
}

impl Operation for QueryVectors {
    type Input = QueryVectorsInput;
    type Output = QueryVectorsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("QueryVectors", "/QueryVectors")
        .inputs(&[
            "vectorBucketName",
            "indexName",
            "indexArn",
            "topK",
            "queryVector",
            "filter",
            "returnMetadata",
            "returnDistance",
        ])
        .required(&["topK", "queryVector"])
        .outputs(&["vectors", "distanceMetric"])
        .select(DefaultSelect::Field("vectors"));
}

// ── Bucket policies ─────────────────────────────────────────────────────

pub struct GetVectorBucketPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetVectorBucketPolicyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

impl Operation for GetVectorBucketPolicy {
    type Input = BucketInput;
    type Output = GetVectorBucketPolicyOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("GetVectorBucketPolicy", "/GetVectorBucketPolicy")
        .inputs(BUCKET_INPUTS)
        .outputs(&["policy"])
        .select(DefaultSelect::Field("policy"));
}

pub struct PutVectorBucketPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutVectorBucketPolicyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_bucket_arn: Option<String>,
    /// Policy document as a JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
}

impl Operation for PutVectorBucketPolicy {
    type Input = PutVectorBucketPolicyInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("PutVectorBucketPolicy", "/PutVectorBucketPolicy")
        .inputs(&["vectorBucketName", "vectorBucketArn", "policy"])
        .required(&["policy"])
        .select(DefaultSelect::Nothing)
        .pass_thru("vectorBucketName");
}

pub struct DeleteVectorBucketPolicy;

impl Operation for DeleteVectorBucketPolicy {
    type Input = BucketInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteVectorBucketPolicy", "/DeleteVectorBucketPolicy")
        .inputs(BUCKET_INPUTS)
        .select(DefaultSelect::Nothing)
        .pass_thru("vectorBucketName")
        .confirm("vectorBucketName");
}
