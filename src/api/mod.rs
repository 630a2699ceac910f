//! Backend API integration.
//!
//! This module provides a thin interface to the two backend collaborators:
//! the news feed endpoint and the analysis endpoint.

mod client;
mod converter;

pub use client::{AnalyzeRequest, AnalyzeResponse, ApiClient, ApiClientBuilder};
pub use converter::{DataConverter, HeadlineRecord};
