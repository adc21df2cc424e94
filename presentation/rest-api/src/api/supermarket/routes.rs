use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::supermarket::use_cases::find_nearby::{
    FindNearbySupermarketsParams, FindNearbySupermarketsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::supermarket::dto::SupermarketResponse;
use crate::api::tags::ApiTags;

pub struct SupermarketApi {
    find_nearby_use_case: Arc<dyn FindNearbySupermarketsUseCase>,
}

impl SupermarketApi {
    pub fn new(find_nearby_use_case: Arc<dyn FindNearbySupermarketsUseCase>) -> Self {
        Self {
            find_nearby_use_case,
        }
    }
}

#[OpenApi]
impl SupermarketApi {
    /// Supermarkets near a location
    ///
    /// `location` is "latitude,longitude"; `radius` is in meters (default 500).
    /// Results come from OpenStreetMap through the Overpass API.
    #[oai(
        path = "/nearby-supermarkets",
        method = "get",
        tag = "ApiTags::Supermarkets"
    )]
    async fn find_nearby(
        &self,
        location: Query<Option<String>>,
        radius: Query<Option<u32>>,
    ) -> FindNearbySupermarketsResponse {
        let params = FindNearbySupermarketsParams {
            location: location.0,
            radius_meters: radius.0,
        };

        match self.find_nearby_use_case.execute(params).await {
            Ok(supermarkets) => {
                let responses: Vec<SupermarketResponse> =
                    supermarkets.into_iter().map(|s| s.into()).collect();
                FindNearbySupermarketsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FindNearbySupermarketsResponse::BadRequest(json),
                    _ => FindNearbySupermarketsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindNearbySupermarketsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SupermarketResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
