//! Users and tags

use shared::models::{Tag, User, UserDefaultTagCar, UserImage};
use shared::{ActionResponse, DataResult};

use super::{CentralServerClient, log_call};
use crate::endpoint::{ServerAction, ServerRoute};
use crate::query::{PagingParams, QueryParams};
use crate::ClientResult;

impl CentralServerClient {
    pub async fn get_users(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<User>> {
        log_call("get_users");
        let url = self.url(ServerRoute::Users, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        log_call("get_user");
        let url = self.url(ServerRoute::User, &[("id", id)])?;
        self.rest.get_json(&url, &self.secured(), None).await
    }

    /// The user's picture (already a data URI on the server side)
    pub async fn get_user_image(&self, id: &str) -> ClientResult<Option<String>> {
        log_call("get_user_image");
        let url = self.url(ServerRoute::UserImage, &[("id", id)])?;
        let query = QueryParams::new().with("ID", id);
        let image: Option<UserImage> = self.rest.get_json(&url, &self.secured(), Some(&query)).await?;
        Ok(image.and_then(|i| i.image))
    }

    /// Tag and car pre-selected for a remote start
    pub async fn get_user_default_tag_car(&self, user_id: &str) -> ClientResult<UserDefaultTagCar> {
        log_call("get_user_default_tag_car");
        let url = self.url(ServerRoute::UserDefaultTagCar, &[("id", user_id)])?;
        let query = QueryParams::new().with("UserID", user_id);
        self.rest.get_json(&url, &self.secured(), Some(&query)).await
    }

    /// See [`crate::SessionManager::save_user_mobile_token`]
    pub async fn save_user_mobile_token(
        &self,
        user_id: &str,
        mobile_token: Option<&str>,
        mobile_os: &str,
    ) -> ClientResult<ActionResponse> {
        log_call("save_user_mobile_token");
        self.session
            .save_user_mobile_token(user_id, mobile_token, mobile_os)
            .await
    }

    /// Tags issued by this organization only (`Issuer=true` is forced)
    pub async fn get_tags(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<Tag>> {
        log_call("get_tags");
        let url = self.legacy_url(ServerAction::Tags)?;
        self.get_list(&url, params.with("Issuer", true), paging, sorting)
            .await
    }
}
