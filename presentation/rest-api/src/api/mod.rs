pub mod amount;
pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod price {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod store {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

#[cfg(test)]
pub(crate) mod test_support;
