pub mod db;
pub mod seed;
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list_item {
    pub mod entity;
    pub mod repository;
}
