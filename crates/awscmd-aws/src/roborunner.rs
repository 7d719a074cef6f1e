//! AWS IoT RoboRunner operations.
//!
//! REST-JSON: `get*`/`list*` calls are GETs with their inputs in the query
//! string, everything else POSTs a JSON body to `/<operationName>`.
//!
//! Reference: <https://docs.aws.amazon.com/iotroborunner/latest/api/>

use awscmd_core::{DefaultSelect, Nested, Operation, OperationDescriptor, Paginated, Protocol, ServiceSpec};
use serde::{Deserialize, Serialize};

pub const SERVICE: &ServiceSpec = &ServiceSpec {
    name: "AWS IoT RoboRunner",
    endpoint_prefix: "iotroborunner",
    signing_name: "iotroborunner",
    protocol: Protocol::RestJson,
};

// ── Shared shapes ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_worker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_worker_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_additional_transient_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_additional_fixed_properties: Option<String>,
}

impl Nested for VendorProperties {
    fn is_unset(&self) -> bool {
        self.vendor_worker_id.is_none()
            && self.vendor_worker_ip_address.is_none()
            && self.vendor_additional_transient_properties.is_none()
            && self.vendor_additional_fixed_properties.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartesianCoordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Nested for CartesianCoordinates {
    fn is_unset(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionCoordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartesian_coordinates: Option<CartesianCoordinates>,
}

impl Nested for PositionCoordinates {
    fn is_unset(&self) -> bool {
        self.cartesian_coordinates.is_unset()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orientation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<f64>,
}

impl Nested for Orientation {
    fn is_unset(&self) -> bool {
        self.degrees.is_none()
    }
}

/// Returned by every `create*` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Created {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// Input for `get*`/`delete*` calls addressed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerFleet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Worker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_transient_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_properties: Option<VendorProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// `ENABLED`, `DISABLED` or `DECOMMISSIONED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<f64>,
}

const CREATED_OUTPUTS: &[&str] = &["arn", "id", "createdAt", "updatedAt", "site", "state"];

// ── Sites ───────────────────────────────────────────────────────────────

pub struct CreateSite;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Operation for CreateSite {
    type Input = CreateSiteInput;
    type Output = Created;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateSite", "/createSite")
        .inputs(&["clientToken", "name", "countryCode", "description"])
        .required(&["name", "countryCode"])
        .outputs(CREATED_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("name");
}

pub struct GetSite;

impl Operation for GetSite {
    type Input = IdInput;
    type Output = Site;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("GetSite", "/getSite")
        .inputs(&["id"])
        .required(&["id"])
        .outputs(&["arn", "id", "name", "countryCode", "description", "createdAt", "updatedAt"])
        .select(DefaultSelect::Whole);
}

pub struct UpdateSite;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Operation for UpdateSite {
    type Input = UpdateSiteInput;
    type Output = Site;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("UpdateSite", "/updateSite")
        .inputs(&["id", "name", "countryCode", "description"])
        .required(&["id"])
        .outputs(&["arn", "id", "name", "countryCode", "description", "updatedAt"])
        .select(DefaultSelect::Whole)
        .pass_thru("id");
}

pub struct DeleteSite;

impl Operation for DeleteSite {
    type Input = IdInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteSite", "/deleteSite")
        .inputs(&["id"])
        .required(&["id"])
        .select(DefaultSelect::Nothing)
        .pass_thru("id")
        .confirm("id");
}

pub struct ListSites;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSitesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListSitesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<Site>>,
}

impl Operation for ListSites {
    type Input = ListSitesInput;
    type Output = ListSitesOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("ListSites", "/listSites")
        .inputs(&["maxResults", "nextToken"])
        .outputs(&["nextToken", "sites"])
        .select(DefaultSelect::Field("sites"));
}

impl Paginated for ListSites {
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

// ── Worker fleets ───────────────────────────────────────────────────────

pub struct CreateWorkerFleet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerFleetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// JSON document, passed through as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
}

impl Operation for CreateWorkerFleet {
    type Input = CreateWorkerFleetInput;
    type Output = Created;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateWorkerFleet", "/createWorkerFleet")
        .inputs(&["clientToken", "name", "site", "additionalFixedProperties"])
        .required(&["name", "site"])
        .outputs(CREATED_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("name");
}

pub struct GetWorkerFleet;

impl Operation for GetWorkerFleet {
    type Input = IdInput;
    type Output = WorkerFleet;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("GetWorkerFleet", "/getWorkerFleet")
        .inputs(&["id"])
        .required(&["id"])
        .outputs(&["arn", "id", "name", "site", "additionalFixedProperties", "createdAt", "updatedAt"])
        .select(DefaultSelect::Whole);
}

pub struct UpdateWorkerFleet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerFleetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
}

impl Operation for UpdateWorkerFleet {
    type Input = UpdateWorkerFleetInput;
    type Output = WorkerFleet;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("UpdateWorkerFleet", "/updateWorkerFleet")
        .inputs(&["id", "name", "additionalFixedProperties"])
        .required(&["id"])
        .outputs(&["arn", "id", "name", "updatedAt", "additionalFixedProperties"])
        .select(DefaultSelect::Whole)
        .pass_thru("id");
}

pub struct DeleteWorkerFleet;

impl Operation for DeleteWorkerFleet {
    type Input = IdInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteWorkerFleet", "/deleteWorkerFleet")
        .inputs(&["id"])
        .required(&["id"])
        .select(DefaultSelect::Nothing)
        .pass_thru("id")
        .confirm("id");
}

pub struct ListWorkerFleets;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkerFleetsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListWorkerFleetsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_fleets: Option<Vec<WorkerFleet>>,
}

impl Operation for ListWorkerFleets {
    type Input = ListWorkerFleetsInput;
    type Output = ListWorkerFleetsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("ListWorkerFleets", "/listWorkerFleets")
        .inputs(&["site", "maxResults", "nextToken"])
        .required(&["site"])
        .outputs(&["nextToken", "workerFleets"])
        .select(DefaultSelect::Field("workerFleets"))
        .pass_thru("site");
}

impl Paginated for ListWorkerFleets {
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

// ── Workers ─────────────────────────────────────────────────────────────

const WORKER_OUTPUTS: &[&str] = &[
    "arn",
    "id",
    "fleet",
    "site",
    "name",
    "additionalTransientProperties",
    "additionalFixedProperties",
    "vendorProperties",
    "position",
    "orientation",
    "createdAt",
    "updatedAt",
];

pub struct CreateWorker;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_transient_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_properties: Option<VendorProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Operation for CreateWorker {
    type Input = CreateWorkerInput;
    type Output = Created;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateWorker", "/createWorker")
        .inputs(&[
            "clientToken",
            "name",
            "fleet",
            "additionalTransientProperties",
            "additionalFixedProperties",
            "vendorProperties.vendorWorkerId",
            "vendorProperties.vendorWorkerIpAddress",
            "vendorProperties.vendorAdditionalTransientProperties",
            "vendorProperties.vendorAdditionalFixedProperties",
            "position.cartesianCoordinates.x",
            "position.cartesianCoordinates.y",
            "position.cartesianCoordinates.z",
            "orientation.degrees",
        ])
        .required(&[
            "name",
            "fleet",
            "vendorProperties.vendorWorkerId",
            "position.cartesianCoordinates.x",
            "position.cartesianCoordinates.y",
        ])
        .outputs(CREATED_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("name");
}

pub struct GetWorker;

impl Operation for GetWorker {
    type Input = IdInput;
    type Output = Worker;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("GetWorker", "/getWorker")
        .inputs(&["id"])
        .required(&["id"])
        .outputs(WORKER_OUTPUTS)
        .select(DefaultSelect::Whole);
}

pub struct UpdateWorker;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_transient_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_properties: Option<VendorProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Operation for UpdateWorker {
    type Input = UpdateWorkerInput;
    type Output = Worker;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("UpdateWorker", "/updateWorker")
        .inputs(&[
            "id",
            "name",
            "additionalTransientProperties",
            "additionalFixedProperties",
            "vendorProperties.vendorWorkerId",
            "vendorProperties.vendorWorkerIpAddress",
            "vendorProperties.vendorAdditionalTransientProperties",
            "vendorProperties.vendorAdditionalFixedProperties",
            "position.cartesianCoordinates.x",
            "position.cartesianCoordinates.y",
            "position.cartesianCoordinates.z",
            "orientation.degrees",
        ])
        .required(&[
            "id",
            "vendorProperties.vendorWorkerId",
            "position.cartesianCoordinates.x",
            "position.cartesianCoordinates.y",
        ])
        .outputs(WORKER_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("id");
}

pub struct DeleteWorker;

impl Operation for DeleteWorker {
    type Input = IdInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteWorker", "/deleteWorker")
        .inputs(&["id"])
        .required(&["id"])
        .select(DefaultSelect::Nothing)
        .pass_thru("id")
        .confirm("id");
}

pub struct ListWorkers;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListWorkersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<Vec<Worker>>,
}

impl Operation for ListWorkers {
    type Input = ListWorkersInput;
    type Output = ListWorkersOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("ListWorkers", "/listWorkers")
        .inputs(&["site", "fleet", "maxResults", "nextToken"])
        .required(&["site"])
        .outputs(&["nextToken", "workers"])
        .select(DefaultSelect::Field("workers"))
        .pass_thru("site");
}

impl Paginated for ListWorkers {
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

// ── Destinations ────────────────────────────────────────────────────────

const DESTINATION_OUTPUTS: &[&str] = &[
    "arn",
    "id",
    "name",
    "site",
    "state",
    "additionalFixedProperties",
    "createdAt",
    "updatedAt",
];

pub struct CreateDestination;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
}

impl Operation for CreateDestination {
    type Input = CreateDestinationInput;
    type Output = Created;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("CreateDestination", "/createDestination")
        .inputs(&["clientToken", "name", "site", "state", "additionalFixedProperties"])
        .required(&["name", "site"])
        .outputs(CREATED_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("name");
}

pub struct GetDestination;

impl Operation for GetDestination {
    type Input = IdInput;
    type Output = Destination;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("GetDestination", "/getDestination")
        .inputs(&["id"])
        .required(&["id"])
        .outputs(DESTINATION_OUTPUTS)
        .select(DefaultSelect::Whole);
}

pub struct UpdateDestination;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestinationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fixed_properties: Option<String>,
}

impl Operation for UpdateDestination {
    type Input = UpdateDestinationInput;
    type Output = Destination;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("UpdateDestination", "/updateDestination")
        .inputs(&["id", "name", "state", "additionalFixedProperties"])
        .required(&["id"])
        .outputs(DESTINATION_OUTPUTS)
        .select(DefaultSelect::Whole)
        .pass_thru("id");
}

pub struct DeleteDestination;

impl Operation for DeleteDestination {
    type Input = IdInput;
    type Output = Empty;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .post("DeleteDestination", "/deleteDestination")
        .inputs(&["id"])
        .required(&["id"])
        .select(DefaultSelect::Nothing)
        .pass_thru("id")
        .confirm("id");
}

pub struct ListDestinations;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDestinationsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDestinationsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Destination>>,
}

impl Operation for ListDestinations {
    type Input = ListDestinationsInput;
    type Output = ListDestinationsOutput;
    const DESCRIPTOR: OperationDescriptor = SERVICE
        .get("ListDestinations", "/listDestinations")
        .inputs(&["site", "state", "maxResults", "nextToken"])
        .required(&["site"])
        .outputs(&["nextToken", "destinations"])
        .select(DefaultSelect::Field("destinations"))
        .pass_thru("site");
}

impl Paginated for ListDestinations {
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

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::{nested, HttpMethod, InvocationContext, InvocationOptions, WireRequest};
    use serde_json::json;

    #[test]
    fn list_workers_goes_in_query_string() {
        let input = ListWorkersInput {
            site: Some("arn:aws:iotroborunner:us-east-1:123:site/s1".into()),
            fleet: Some("f1".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        let request = WireRequest::build(&ListWorkers::DESCRIPTOR, &body).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/listWorkers");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query["fleet"], "f1");
        assert!(request.body.is_empty());
    }

    #[test]
    fn delete_posts_identifier() {
        let body = serde_json::to_value(IdInput { id: Some("w1".into()) }).unwrap();
        let request = WireRequest::build(&DeleteWorker::DESCRIPTOR, &body).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, r#"{"id":"w1"}"#);
        assert_eq!(DeleteWorker::DESCRIPTOR.confirm_target, Some("id"));
    }

    #[test]
    fn worker_without_position_omits_it() {
        let input = CreateWorkerInput {
            name: Some("w".into()),
            fleet: Some("f".into()),
            position: nested(PositionCoordinates {
                cartesian_coordinates: nested(CartesianCoordinates::default()),
            }),
            orientation: nested(Orientation::default()),
            ..Default::default()
        };
        assert!(InvocationContext::<CreateWorker>::new(input, &InvocationOptions::default()).is_ok());
    }

    #[test]
    fn vendor_properties_require_worker_id_once_present() {
        let input = CreateWorkerInput {
            name: Some("w".into()),
            fleet: Some("f".into()),
            vendor_properties: nested(VendorProperties {
                vendor_worker_ip_address: Some("10.0.0.4".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = InvocationContext::<CreateWorker>::new(input, &InvocationOptions::default())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("vendorProperties.vendorWorkerId"));
    }

    #[test]
    fn worker_position_serializes_nested() {
        let input = UpdateWorkerInput {
            id: Some("w".into()),
            position: nested(PositionCoordinates {
                cartesian_coordinates: nested(CartesianCoordinates {
                    x: Some(1.0),
                    y: Some(2.5),
                    z: None,
                }),
            }),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({"id": "w", "position": {"cartesianCoordinates": {"x": 1.0, "y": 2.5}}})
        );
    }

    #[test]
    fn list_output_decodes_workers() {
        let output: ListWorkersOutput = serde_json::from_value(json!({
            "nextToken": "abc",
            "workers": [{
                "arn": "arn:w1",
                "id": "w1",
                "fleet": "f1",
                "site": "s1",
                "name": "robot",
                "createdAt": 1700000000.0,
                "updatedAt": 1700000001.0,
                "orientation": {"degrees": 90.0}
            }]
        }))
        .unwrap();
        assert_eq!(ListWorkers::next_token(&output), Some("abc"));
        let worker = &output.workers.as_ref().unwrap()[0];
        assert_eq!(worker.orientation.as_ref().unwrap().degrees, Some(90.0));
    }
}
