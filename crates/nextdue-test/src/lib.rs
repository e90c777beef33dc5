//! nextdue task server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use a single
//! `nextdue_test::` path.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use nextdue_core::*;
    pub use nextdue_service::*;

    pub mod config {
        pub use nextdue_app::config::ConfigHandler;
        pub use nextdue_core::config::*;
    }

    pub mod store {
        pub use nextdue_app::store_handler::TaskStoreHandler;
        pub use nextdue_service::task::store::*;
    }
}

pub mod app {
    pub use nextdue_app::*;

    pub mod api {
        pub use nextdue_app::app::api::*;
    }
}

pub use nextdue_rule as rule;
