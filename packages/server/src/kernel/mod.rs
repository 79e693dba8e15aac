// Infrastructure: the persistence seam and its implementations
pub mod postgres;
pub mod store;
pub mod testing;

pub use postgres::*;
pub use store::*;
