//! Cars and the car catalog

use shared::request::CarCreateRequest;
use shared::{ActionResponse, DataResult};
use shared::models::{Car, CarCatalog};

use super::{CentralServerClient, log_call};
use crate::endpoint::{ServerAction, ServerRoute};
use crate::query::{PagingParams, QueryParams};
use crate::ClientResult;

impl CentralServerClient {
    /// Create a car; `forced` creates it even when the VIN is already known
    pub async fn create_car(&self, car: &Car, forced: bool) -> ClientResult<ActionResponse> {
        log_call("create_car");
        let url = self.url(ServerRoute::Cars, &[])?;
        let body = CarCreateRequest {
            car: car.clone(),
            forced,
        };
        self.rest.post_json(&url, &self.secured(), &body).await
    }

    pub async fn get_cars(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<Car>> {
        log_call("get_cars");
        let url = self.legacy_url(ServerAction::Cars)?;
        self.get_list(&url, params, paging, sorting).await
    }

    pub async fn get_car_catalog(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<CarCatalog>> {
        log_call("get_car_catalog");
        let url = self.legacy_url(ServerAction::CarCatalogs)?;
        self.get_list(&url, params, paging, sorting).await
    }

    /// One car, selected through `params` (e.g. `ID`)
    pub async fn get_car(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<Car> {
        log_call("get_car");
        let url = self.legacy_url(ServerAction::Car)?;
        self.get_list(&url, params, paging, sorting).await
    }
}
