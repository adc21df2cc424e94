use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Items,
    ShoppingLists,
    ShoppingListItems,
    Statistics,
    Supermarkets,
}
