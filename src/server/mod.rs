//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for persistence. Proof images
//! are written to a pluggable object storage backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, caller extraction and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, image uploads and export rendering
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer authentication, body validation and exchange logging
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, storage, token verifier, observer)
//! - **Startup** (`startup`) - Tracing, database, storage and CORS initialization
//! - **Router** (`router`) - Route table, middleware stack and OpenAPI document
//! - **Storage** (`storage/`) - Data URL decoding and object storage backends
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; the exchange observer records it
//! 2. **Middleware** extractors authenticate the caller and validate the body
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** applies business rules and orchestrates storage and data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO inside the success envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
