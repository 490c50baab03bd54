//! Public API types

// Re-export public types from each route

pub mod calendar {
    pub use crate::api::routes::calendar::public::*;
}

pub mod oauth {
    pub use crate::api::routes::oauth::public::*;
}
