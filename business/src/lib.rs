pub mod application {
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_by_item;
        pub mod search;
        pub mod update;
    }
    pub mod shopping_list_item {
        pub mod add;
        pub mod get_by_shopping_list;
        pub mod remove;
        pub mod update;
    }
    pub mod statistics {
        pub mod count;
        pub mod get_pending_items;
    }
    pub mod supermarket {
        pub mod find_nearby;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_by_item;
            pub mod search;
            pub mod update;
        }
    }
    pub mod shopping_list_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_by_shopping_list;
            pub mod remove;
            pub mod update;
        }
    }
    pub mod statistics {
        pub mod aggregation;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod count;
            pub mod get_pending_items;
        }
    }
    pub mod supermarket {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod find_nearby;
        }
    }
}
