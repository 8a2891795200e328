mod keepa;
mod walmart;

pub use keepa::KeepaClient;
pub use walmart::WalmartClient;
