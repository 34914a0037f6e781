//! Delivery client module for the third-party upload and email APIs

mod client;
mod traits;

pub use client::DeliveryClient;
pub use traits::DeliveryClientTrait;

#[cfg(test)]
pub use traits::MockDeliveryClientTrait;
