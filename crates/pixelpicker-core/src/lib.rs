pub mod config;
pub mod consts;
pub mod error;
pub mod event;
pub mod mapper;
pub mod picking;
pub mod store;
pub mod viewer;
pub mod viewport;
pub mod zoom;
