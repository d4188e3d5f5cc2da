pub mod db;
pub mod errors;
pub mod price {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod store {
    pub mod entity;
    pub mod repository;
}
