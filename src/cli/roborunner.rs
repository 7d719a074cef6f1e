//! IoT RoboRunner commands (noun prefix `ROBO`).

use super::text_arg;
use crate::runtime::Runtime;
use anyhow::Result;
use awscmd_aws::roborunner::*;
use awscmd_core::{idempotency_token, nested, Envelope, Transport};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum RoboRunnerCommand {
    /// Create a site
    #[command(name = "New-ROBOSite")]
    CreateSite(CreateSiteArgs),
    /// Describe a site
    #[command(name = "Get-ROBOSite")]
    GetSite(IdArgs),
    /// Update a site
    #[command(name = "Update-ROBOSite")]
    UpdateSite(UpdateSiteArgs),
    /// Delete a site
    #[command(name = "Remove-ROBOSite")]
    DeleteSite(IdArgs),
    /// List sites
    #[command(name = "Get-ROBOSiteList")]
    ListSites(ListSitesArgs),

    /// Create a worker fleet
    #[command(name = "New-ROBOWorkerFleet")]
    CreateWorkerFleet(CreateWorkerFleetArgs),
    /// Describe a worker fleet
    #[command(name = "Get-ROBOWorkerFleet")]
    GetWorkerFleet(IdArgs),
    /// Update a worker fleet
    #[command(name = "Update-ROBOWorkerFleet")]
    UpdateWorkerFleet(UpdateWorkerFleetArgs),
    /// Delete a worker fleet
    #[command(name = "Remove-ROBOWorkerFleet")]
    DeleteWorkerFleet(IdArgs),
    /// List the worker fleets in a site
    #[command(name = "Get-ROBOWorkerFleetList")]
    ListWorkerFleets(ListWorkerFleetsArgs),

    /// Create a worker
    #[command(name = "New-ROBOWorker")]
    CreateWorker(CreateWorkerArgs),
    /// Describe a worker
    #[command(name = "Get-ROBOWorker")]
    GetWorker(IdArgs),
    /// Update a worker
    #[command(name = "Update-ROBOWorker")]
    UpdateWorker(UpdateWorkerArgs),
    /// Delete a worker
    #[command(name = "Remove-ROBOWorker")]
    DeleteWorker(IdArgs),
    /// List the workers in a site
    #[command(name = "Get-ROBOWorkerList")]
    ListWorkers(ListWorkersArgs),

    /// Create a destination
    #[command(name = "New-ROBODestination")]
    CreateDestination(CreateDestinationArgs),
    /// Describe a destination
    #[command(name = "Get-ROBODestination")]
    GetDestination(IdArgs),
    /// Update a destination
    #[command(name = "Update-ROBODestination")]
    UpdateDestination(UpdateDestinationArgs),
    /// Delete a destination
    #[command(name = "Remove-ROBODestination")]
    DeleteDestination(IdArgs),
    /// List the destinations in a site
    #[command(name = "Get-ROBODestinationList")]
    ListDestinations(ListDestinationsArgs),
}

impl RoboRunnerCommand {
    pub async fn run<T: Transport>(self, rt: &Runtime<T>) -> Result<Vec<Envelope>> {
        Ok(match self {
            Self::CreateSite(a) => rt.execute::<CreateSite>(a.into_input()).await,
            Self::GetSite(a) => rt.execute::<GetSite>(a.into_input()).await,
            Self::UpdateSite(a) => rt.execute::<UpdateSite>(a.into_input()).await,
            Self::DeleteSite(a) => rt.execute::<DeleteSite>(a.into_input()).await,
            Self::ListSites(a) => rt.execute_paged::<ListSites>(a.into_input()).await,

            Self::CreateWorkerFleet(a) => rt.execute::<CreateWorkerFleet>(a.into_input()?).await,
            Self::GetWorkerFleet(a) => rt.execute::<GetWorkerFleet>(a.into_input()).await,
            Self::UpdateWorkerFleet(a) => rt.execute::<UpdateWorkerFleet>(a.into_input()?).await,
            Self::DeleteWorkerFleet(a) => rt.execute::<DeleteWorkerFleet>(a.into_input()).await,
            Self::ListWorkerFleets(a) => {
                rt.execute_paged::<ListWorkerFleets>(a.into_input()).await
            }

            Self::CreateWorker(a) => rt.execute::<CreateWorker>(a.into_input()?).await,
            Self::GetWorker(a) => rt.execute::<GetWorker>(a.into_input()).await,
            Self::UpdateWorker(a) => rt.execute::<UpdateWorker>(a.into_input()?).await,
            Self::DeleteWorker(a) => rt.execute::<DeleteWorker>(a.into_input()).await,
            Self::ListWorkers(a) => rt.execute_paged::<ListWorkers>(a.into_input()).await,

            Self::CreateDestination(a) => rt.execute::<CreateDestination>(a.into_input()?).await,
            Self::GetDestination(a) => rt.execute::<GetDestination>(a.into_input()).await,
            Self::UpdateDestination(a) => rt.execute::<UpdateDestination>(a.into_input()?).await,
            Self::DeleteDestination(a) => rt.execute::<DeleteDestination>(a.into_input()).await,
            Self::ListDestinations(a) => {
                rt.execute_paged::<ListDestinations>(a.into_input()).await
            }
        })
    }
}

/// Optional JSON-document property, inline or `file://path`.
fn document(raw: Option<String>) -> Result<Option<String>> {
    raw.map(text_arg).transpose()
}

// ── Arguments ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct IdArgs {
    /// Identifier or ARN
    #[arg(long)]
    pub id: Option<String>,
}

impl IdArgs {
    fn into_input(self) -> IdInput {
        IdInput { id: self.id }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub max_results: Option<i32>,
    /// Start from this token; fetches a single page
    #[arg(long)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateSiteArgs {
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_token: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl CreateSiteArgs {
    fn into_input(self) -> CreateSiteInput {
        CreateSiteInput {
            client_token: idempotency_token(self.client_token),
            name: self.name,
            country_code: self.country_code,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateSiteArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl UpdateSiteArgs {
    fn into_input(self) -> UpdateSiteInput {
        UpdateSiteInput {
            id: self.id,
            name: self.name,
            country_code: self.country_code,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListSitesArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

impl ListSitesArgs {
    fn into_input(self) -> ListSitesInput {
        ListSitesInput {
            max_results: self.page.max_results,
            next_token: self.page.next_token,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateWorkerFleetArgs {
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_token: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// Site ARN
    #[arg(long)]
    pub site: Option<String>,
    /// JSON document, inline or file://path
    #[arg(long)]
    pub additional_fixed_properties: Option<String>,
}

impl CreateWorkerFleetArgs {
    fn into_input(self) -> Result<CreateWorkerFleetInput> {
        Ok(CreateWorkerFleetInput {
            client_token: idempotency_token(self.client_token),
            name: self.name,
            site: self.site,
            additional_fixed_properties: document(self.additional_fixed_properties)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateWorkerFleetArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub additional_fixed_properties: Option<String>,
}

impl UpdateWorkerFleetArgs {
    fn into_input(self) -> Result<UpdateWorkerFleetInput> {
        Ok(UpdateWorkerFleetInput {
            id: self.id,
            name: self.name,
            additional_fixed_properties: document(self.additional_fixed_properties)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListWorkerFleetsArgs {
    /// Site ARN
    #[arg(long)]
    pub site: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl ListWorkerFleetsArgs {
    fn into_input(self) -> ListWorkerFleetsInput {
        ListWorkerFleetsInput {
            site: self.site,
            max_results: self.page.max_results,
            next_token: self.page.next_token,
        }
    }
}

/// Worker properties shared by create and update.
#[derive(Debug, Clone, Default, Args)]
pub struct WorkerStateArgs {
    /// JSON document, inline or file://path
    #[arg(long)]
    pub additional_transient_properties: Option<String>,
    /// JSON document, inline or file://path
    #[arg(long)]
    pub additional_fixed_properties: Option<String>,
    #[arg(long = "vendor-properties.vendor-worker-id")]
    pub vendor_worker_id: Option<String>,
    #[arg(long = "vendor-properties.vendor-worker-ip-address")]
    pub vendor_worker_ip_address: Option<String>,
    #[arg(long = "vendor-properties.vendor-additional-transient-properties")]
    pub vendor_additional_transient_properties: Option<String>,
    #[arg(long = "vendor-properties.vendor-additional-fixed-properties")]
    pub vendor_additional_fixed_properties: Option<String>,
    #[arg(long = "position.cartesian-coordinates.x", allow_negative_numbers = true)]
    pub x: Option<f64>,
    #[arg(long = "position.cartesian-coordinates.y", allow_negative_numbers = true)]
    pub y: Option<f64>,
    #[arg(long = "position.cartesian-coordinates.z", allow_negative_numbers = true)]
    pub z: Option<f64>,
    #[arg(long = "orientation.degrees", allow_negative_numbers = true)]
    pub degrees: Option<f64>,
}

struct WorkerState {
    additional_transient_properties: Option<String>,
    additional_fixed_properties: Option<String>,
    vendor_properties: Option<VendorProperties>,
    position: Option<PositionCoordinates>,
    orientation: Option<Orientation>,
}

impl WorkerStateArgs {
    fn resolve(self) -> Result<WorkerState> {
        Ok(WorkerState {
            additional_transient_properties: document(self.additional_transient_properties)?,
            additional_fixed_properties: document(self.additional_fixed_properties)?,
            vendor_properties: nested(VendorProperties {
                vendor_worker_id: self.vendor_worker_id,
                vendor_worker_ip_address: self.vendor_worker_ip_address,
                vendor_additional_transient_properties: self.vendor_additional_transient_properties,
                vendor_additional_fixed_properties: self.vendor_additional_fixed_properties,
            }),
            position: nested(PositionCoordinates {
                cartesian_coordinates: nested(CartesianCoordinates {
                    x: self.x,
                    y: self.y,
                    z: self.z,
                }),
            }),
            orientation: nested(Orientation {
                degrees: self.degrees,
            }),
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateWorkerArgs {
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_token: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// Worker fleet ARN
    #[arg(long)]
    pub fleet: Option<String>,
    #[command(flatten)]
    pub state: WorkerStateArgs,
}

impl CreateWorkerArgs {
    fn into_input(self) -> Result<CreateWorkerInput> {
        let state = self.state.resolve()?;
        Ok(CreateWorkerInput {
            client_token: idempotency_token(self.client_token),
            name: self.name,
            fleet: self.fleet,
            additional_transient_properties: state.additional_transient_properties,
            additional_fixed_properties: state.additional_fixed_properties,
            vendor_properties: state.vendor_properties,
            position: state.position,
            orientation: state.orientation,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateWorkerArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub state: WorkerStateArgs,
}

impl UpdateWorkerArgs {
    fn into_input(self) -> Result<UpdateWorkerInput> {
        let state = self.state.resolve()?;
        Ok(UpdateWorkerInput {
            id: self.id,
            name: self.name,
            additional_transient_properties: state.additional_transient_properties,
            additional_fixed_properties: state.additional_fixed_properties,
            vendor_properties: state.vendor_properties,
            position: state.position,
            orientation: state.orientation,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListWorkersArgs {
    /// Site ARN
    #[arg(long)]
    pub site: Option<String>,
    /// Only workers in this fleet
    #[arg(long)]
    pub fleet: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl ListWorkersArgs {
    fn into_input(self) -> ListWorkersInput {
        ListWorkersInput {
            site: self.site,
            fleet: self.fleet,
            max_results: self.page.max_results,
            next_token: self.page.next_token,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CreateDestinationArgs {
    /// Idempotency token; generated when omitted
    #[arg(long)]
    pub client_token: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// Site ARN
    #[arg(long)]
    pub site: Option<String>,
    /// `ENABLED`, `DISABLED` or `DECOMMISSIONED`
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub additional_fixed_properties: Option<String>,
}

impl CreateDestinationArgs {
    fn into_input(self) -> Result<CreateDestinationInput> {
        Ok(CreateDestinationInput {
            client_token: idempotency_token(self.client_token),
            name: self.name,
            site: self.site,
            state: self.state,
            additional_fixed_properties: document(self.additional_fixed_properties)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateDestinationArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub additional_fixed_properties: Option<String>,
}

impl UpdateDestinationArgs {
    fn into_input(self) -> Result<UpdateDestinationInput> {
        Ok(UpdateDestinationInput {
            id: self.id,
            name: self.name,
            state: self.state,
            additional_fixed_properties: document(self.additional_fixed_properties)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListDestinationsArgs {
    /// Site ARN
    #[arg(long)]
    pub site: Option<String>,
    /// Only destinations in this state
    #[arg(long)]
    pub state: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl ListDestinationsArgs {
    fn into_input(self) -> ListDestinationsInput {
        ListDestinationsInput {
            site: self.site,
            state: self.state,
            max_results: self.page.max_results,
            next_token: self.page.next_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_site_mints_client_token() {
        let input = CreateSiteArgs {
            name: Some("warehouse".into()),
            country_code: Some("US".into()),
            ..Default::default()
        }
        .into_input();
        assert!(input.client_token.is_some());

        let input = CreateSiteArgs {
            client_token: Some("mine".into()),
            ..Default::default()
        }
        .into_input();
        assert_eq!(input.client_token.as_deref(), Some("mine"));
    }

    #[test]
    fn worker_without_nested_flags_has_no_nested_members() {
        let input = CreateWorkerArgs {
            name: Some("r2".into()),
            fleet: Some("arn:fleet".into()),
            ..Default::default()
        }
        .into_input()
        .unwrap();
        assert!(input.vendor_properties.is_none());
        assert!(input.position.is_none());
        assert!(input.orientation.is_none());
    }

    #[test]
    fn worker_position_from_flags() {
        let input = UpdateWorkerArgs {
            id: Some("w".into()),
            state: WorkerStateArgs {
                x: Some(-1.5),
                y: Some(0.0),
                degrees: Some(180.0),
                ..Default::default()
            },
            ..Default::default()
        }
        .into_input()
        .unwrap();
        let coords = input.position.unwrap().cartesian_coordinates.unwrap();
        assert_eq!((coords.x, coords.y, coords.z), (Some(-1.5), Some(0.0), None));
        assert_eq!(input.orientation.unwrap().degrees, Some(180.0));
    }
}
