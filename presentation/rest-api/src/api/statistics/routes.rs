use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::statistics::model::StatisticKind;
use business::domain::statistics::use_cases::count::CountStatisticUseCase;
use business::domain::statistics::use_cases::get_pending_items::GetPendingItemsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::statistics::dto::{
    PendingItemsCountResponse, PendingItemsListResponse, PurchasedItemsResponse,
    TotalItemsResponse, TotalShoppingListsResponse,
};
use crate::api::tags::ApiTags;

pub struct StatisticsApi {
    count_use_case: Arc<dyn CountStatisticUseCase>,
    pending_items_use_case: Arc<dyn GetPendingItemsUseCase>,
}

impl StatisticsApi {
    pub fn new(
        count_use_case: Arc<dyn CountStatisticUseCase>,
        pending_items_use_case: Arc<dyn GetPendingItemsUseCase>,
    ) -> Self {
        Self {
            count_use_case,
            pending_items_use_case,
        }
    }
}

/// Read-only counters and aggregates over lists, items and entries
#[OpenApi]
impl StatisticsApi {
    /// Number of shopping lists
    #[oai(
        path = "/statistics/totalShoppingLists",
        method = "get",
        tag = "ApiTags::Statistics"
    )]
    async fn total_shopping_lists(&self) -> GetTotalShoppingListsResponse {
        match self
            .count_use_case
            .execute(StatisticKind::TotalShoppingLists)
            .await
        {
            Ok(total_shopping_lists) => {
                GetTotalShoppingListsResponse::Ok(Json(TotalShoppingListsResponse {
                    total_shopping_lists,
                }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTotalShoppingListsResponse::InternalError(json)
            }
        }
    }

    /// Number of catalog items
    #[oai(
        path = "/statistics/totalItems",
        method = "get",
        tag = "ApiTags::Statistics"
    )]
    async fn total_items(&self) -> GetTotalItemsResponse {
        match self.count_use_case.execute(StatisticKind::TotalItems).await {
            Ok(total_items) => GetTotalItemsResponse::Ok(Json(TotalItemsResponse { total_items })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTotalItemsResponse::InternalError(json)
            }
        }
    }

    /// Number of purchased entries
    #[oai(
        path = "/statistics/purchasedItems",
        method = "get",
        tag = "ApiTags::Statistics"
    )]
    async fn purchased_items(&self) -> GetPurchasedItemsResponse {
        match self
            .count_use_case
            .execute(StatisticKind::PurchasedItems)
            .await
        {
            Ok(purchased_items) => {
                GetPurchasedItemsResponse::Ok(Json(PurchasedItemsResponse { purchased_items }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPurchasedItemsResponse::InternalError(json)
            }
        }
    }

    /// Number of pending entries
    #[oai(
        path = "/statistics/pendingItems",
        method = "get",
        tag = "ApiTags::Statistics"
    )]
    async fn pending_items(&self) -> GetPendingItemsCountResponse {
        match self
            .count_use_case
            .execute(StatisticKind::PendingItems)
            .await
        {
            Ok(pending_items) => {
                GetPendingItemsCountResponse::Ok(Json(PendingItemsCountResponse { pending_items }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPendingItemsCountResponse::InternalError(json)
            }
        }
    }

    /// Pending quantities grouped by item
    ///
    /// Items deleted from the catalog are left out.
    #[oai(
        path = "/statistics/pendingItemsList",
        method = "get",
        tag = "ApiTags::Statistics"
    )]
    async fn pending_items_list(&self) -> GetPendingItemsListResponse {
        match self.pending_items_use_case.execute().await {
            Ok(summaries) => GetPendingItemsListResponse::Ok(Json(PendingItemsListResponse {
                pending_items: summaries.into_iter().map(|s| s.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPendingItemsListResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTotalShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<TotalShoppingListsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTotalItemsResponse {
    #[oai(status = 200)]
    Ok(Json<TotalItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPurchasedItemsResponse {
    #[oai(status = 200)]
    Ok(Json<PurchasedItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPendingItemsCountResponse {
    #[oai(status = 200)]
    Ok(Json<PendingItemsCountResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPendingItemsListResponse {
    #[oai(status = 200)]
    Ok(Json<PendingItemsListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
