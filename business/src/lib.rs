pub mod application {
    pub mod qa {
        pub mod ask;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod completion {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod qa {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod ask;
        }
    }
}
