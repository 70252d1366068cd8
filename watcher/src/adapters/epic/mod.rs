//! Epic Games storefront adapter

pub mod client;

pub use client::EpicStoreClient;
