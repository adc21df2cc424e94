use std::sync::Arc;

use logger::TracingLogger;
use overpass::client::OverpassClient;
use overpass::supermarket_finder::SupermarketFinderOverpass;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;
use persistence::shopping_list_item::repository::ShoppingListItemRepositoryPostgres;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::shopping_list::create::CreateShoppingListUseCaseImpl;
use business::application::shopping_list::delete::DeleteShoppingListUseCaseImpl;
use business::application::shopping_list::get_all::GetAllShoppingListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetShoppingListByIdUseCaseImpl;
use business::application::shopping_list::get_by_item::GetShoppingListsByItemUseCaseImpl;
use business::application::shopping_list::search::SearchShoppingListsUseCaseImpl;
use business::application::shopping_list::update::UpdateShoppingListUseCaseImpl;
use business::application::shopping_list_item::add::AddItemToShoppingListUseCaseImpl;
use business::application::shopping_list_item::get_by_shopping_list::GetShoppingListItemsUseCaseImpl;
use business::application::shopping_list_item::remove::RemoveItemFromShoppingListUseCaseImpl;
use business::application::shopping_list_item::update::UpdateShoppingListItemUseCaseImpl;
use business::application::statistics::count::CountStatisticUseCaseImpl;
use business::application::statistics::get_pending_items::GetPendingItemsUseCaseImpl;
use business::application::supermarket::find_nearby::FindNearbySupermarketsUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;
use crate::api::shopping_list::routes::ShoppingListApi;
use crate::api::shopping_list_item::routes::ShoppingListItemApi;
use crate::api::statistics::routes::StatisticsApi;
use crate::api::supermarket::routes::SupermarketApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub item_api: ItemApi,
    pub shopping_list_api: ShoppingListApi,
    pub shopping_list_item_api: ShoppingListItemApi,
    pub statistics_api: StatisticsApi,
    pub supermarket_api: SupermarketApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
        let shopping_list_repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let shopping_list_item_repository = Arc::new(ShoppingListItemRepositoryPostgres::new(pool));
        let supermarket_finder = Arc::new(SupermarketFinderOverpass::new(OverpassClient::new(
            config.overpass.api_url.clone(),
        )));

        // Item use cases
        let item_api = ItemApi::new(
            Arc::new(CreateItemUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllItemsUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetItemByIdUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateItemUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteItemUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Shopping list use cases
        let shopping_list_api = ShoppingListApi::new(
            Arc::new(CreateShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllShoppingListsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetShoppingListByIdUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetShoppingListsByItemUseCaseImpl {
                repository: shopping_list_repository.clone(),
                item_repository: item_repository.clone(),
                shopping_list_item_repository: shopping_list_item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SearchShoppingListsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Shopping list membership use cases
        let shopping_list_item_api = ShoppingListItemApi::new(
            Arc::new(AddItemToShoppingListUseCaseImpl {
                repository: shopping_list_item_repository.clone(),
                shopping_list_repository: shopping_list_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveItemFromShoppingListUseCaseImpl {
                repository: shopping_list_item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateShoppingListItemUseCaseImpl {
                repository: shopping_list_item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetShoppingListItemsUseCaseImpl {
                repository: shopping_list_item_repository.clone(),
                shopping_list_repository: shopping_list_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Statistics use cases
        let statistics_api = StatisticsApi::new(
            Arc::new(CountStatisticUseCaseImpl {
                shopping_list_repository,
                item_repository: item_repository.clone(),
                shopping_list_item_repository: shopping_list_item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetPendingItemsUseCaseImpl {
                item_repository,
                shopping_list_item_repository,
                logger: logger.clone(),
            }),
        );

        // Supermarket use cases
        let supermarket_api = SupermarketApi::new(Arc::new(FindNearbySupermarketsUseCaseImpl {
            finder: supermarket_finder,
            logger,
        }));

        Self {
            health_api: HealthApi,
            item_api,
            shopping_list_api,
            shopping_list_item_api,
            statistics_api,
            supermarket_api,
        }
    }
}
