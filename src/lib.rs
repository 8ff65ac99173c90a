pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod workshops {
        pub mod core {
            pub mod errors;
            pub mod field_patch;
            pub mod membership;
            pub mod workshop;
        }
        pub mod use_cases {
            pub mod manage_membership {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_workshops {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_response;
            }
            pub mod outbound {
                pub mod workshop_record;
                pub mod workshop_repository;
            }
        }
    }
}

pub mod shell;
