//! Charging station queries and OCPP commands

use shared::models::ChargingStation;
use shared::request::{
    OcppParametersRequest, RemoteStartArgs, RemoteStartRequest, RemoteStopArgs,
    RemoteStopRequest, ResetArgs, ResetRequest, ResetType,
};
use shared::{ActionResponse, DataResult, KeyValue};

use super::{CentralServerClient, log_call};
use crate::endpoint::ServerRoute;
use crate::query::{PagingParams, QueryParams};
use crate::ClientResult;

impl CentralServerClient {
    pub async fn get_charging_stations(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<ChargingStation>> {
        log_call("get_charging_stations");
        let url = self.url(ServerRoute::ChargingStations, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    /// One station; `ID` is always sent along with `extra_params`
    pub async fn get_charging_station(
        &self,
        id: &str,
        extra_params: QueryParams,
    ) -> ClientResult<ChargingStation> {
        log_call("get_charging_station");
        let url = self.url(ServerRoute::ChargingStation, &[("id", id)])?;
        let query = extra_params.with("ID", id);
        self.rest.get_json(&url, &self.secured(), Some(&query)).await
    }

    pub async fn get_charging_station_ocpp_parameters(
        &self,
        id: &str,
    ) -> ClientResult<DataResult<KeyValue>> {
        log_call("get_charging_station_ocpp_parameters");
        let url = self.url(ServerRoute::ChargingStationOcppParameters, &[("id", id)])?;
        self.rest.get_json(&url, &self.secured(), None).await
    }

    /// Ask the station to upload its current OCPP configuration
    pub async fn request_charging_station_ocpp_parameters(
        &self,
        id: &str,
    ) -> ClientResult<ActionResponse> {
        log_call("request_charging_station_ocpp_parameters");
        let url = self.url(ServerRoute::ChargingStationRequestOcppParameters, &[])?;
        let body = OcppParametersRequest {
            charging_station_id: id.to_string(),
            force_update_from_template: false,
        };
        self.rest.post_json(&url, &self.secured(), &body).await
    }

    /// Remote start on `connector_id`, badged with `visual_tag_id`
    pub async fn start_transaction(
        &self,
        charging_station_id: &str,
        connector_id: u32,
        visual_tag_id: &str,
        car_id: Option<&str>,
        user_id: Option<&str>,
    ) -> ClientResult<ActionResponse> {
        log_call("start_transaction");
        let url = self.url(
            ServerRoute::ChargingStationRemoteStart,
            &[("id", charging_station_id)],
        )?;
        let body = RemoteStartRequest {
            car_id: car_id.map(str::to_string),
            user_id: user_id.map(str::to_string),
            args: RemoteStartArgs {
                connector_id,
                visual_tag_id: visual_tag_id.to_string(),
            },
        };
        self.rest.put_json(&url, &self.secured(), &body).await
    }

    pub async fn stop_transaction(
        &self,
        charging_station_id: &str,
        transaction_id: i64,
    ) -> ClientResult<ActionResponse> {
        log_call("stop_transaction");
        let url = self.url(
            ServerRoute::ChargingStationRemoteStop,
            &[("id", charging_station_id)],
        )?;
        let body = RemoteStopRequest {
            args: RemoteStopArgs { transaction_id },
        };
        self.rest.put_json(&url, &self.secured(), &body).await
    }

    pub async fn reset(
        &self,
        charging_station_id: &str,
        reset_type: ResetType,
    ) -> ClientResult<ActionResponse> {
        log_call("reset");
        let url = self.url(ServerRoute::ChargingStationReset, &[("id", charging_station_id)])?;
        let body = ResetRequest {
            args: ResetArgs { reset_type },
        };
        self.rest.put_json(&url, &self.secured(), &body).await
    }

    pub async fn clear_cache(&self, charging_station_id: &str) -> ClientResult<ActionResponse> {
        log_call("clear_cache");
        let url = self.url(
            ServerRoute::ChargingStationClearCache,
            &[("id", charging_station_id)],
        )?;
        self.rest.put_json(&url, &self.secured(), &()).await
    }

    pub async fn unlock_connector(
        &self,
        charging_station_id: &str,
        connector_id: u32,
    ) -> ClientResult<ActionResponse> {
        log_call("unlock_connector");
        let connector_id = connector_id.to_string();
        let url = self.url(
            ServerRoute::ChargingStationUnlockConnector,
            &[("id", charging_station_id), ("connectorId", &connector_id)],
        )?;
        self.rest.put_json(&url, &self.secured(), &()).await
    }
}
