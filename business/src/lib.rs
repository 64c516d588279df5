pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_summary;
        mod persist;
        pub mod remove_item;
        pub mod restore;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod calculate_tax;
        pub mod place_order;
        pub mod refresh;
        pub mod set_tax_rate;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_featured;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_featured;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod repository;
        pub mod session;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_summary;
            pub mod remove_item;
            pub mod restore;
            pub mod update_quantity;
        }
    }
    pub mod tax {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod session;
        pub mod use_cases {
            pub mod calculate_tax;
            pub mod place_order;
            pub mod set_tax_rate;
        }
    }
}

#[cfg(test)]
mod test_support;
