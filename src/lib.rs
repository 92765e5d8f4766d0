//! # Product Catalog
//!
//! > **A typed data-access layer for a REST product catalog.**
//!
//! This crate is the repository layer between a catalog front end and its REST API.
//! Callers ask for products and categories; the repositories build the requests,
//! classify the responses and hand back typed records or a classified failure.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a Generic Resource Client?
//!
//! Every resource on the API follows the same shape: a collection at
//! `{base}/{collection}/` and items at `{base}/{collection}/{id}/`, JSON in and
//! JSON out. So the HTTP plumbing is written **once** in
//! [`ResourceClient<T>`](framework::ResourceClient), and each resource only
//! describes itself through [`RestEntity`](framework::RestEntity).
//! - **Benefit**: Status checks, content-type checks and decoding behave the same for every operation.
//! - **Type Safety**: A `ResourceClient<Category>` has no `create`, because `Category`
//!   does not implement [`WritableEntity`](framework::WritableEntity).
//!
//! ### One Success Predicate
//!
//! A response succeeds only when its status is 2xx **and** it declares a JSON
//! content type. Either condition alone is enough to fail, for reads and writes alike.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Classified Errors
//! Every failure is one of three kinds (see [`FrameworkError`](framework::FrameworkError)):
//! - **Transport**: the request never completed; the `reqwest` error is passed through untouched.
//! - **Fetch**: the server answered but the answer failed the success predicate.
//!   The message names the operation, the id and the status.
//! - **Decode**: the answer looked right but its body is not the expected JSON.
//!
//! Repositories never retry and never swallow a failure. What to tell the user is
//! the caller's decision.
//!
//! ### 2. Explicit Wiring
//! There is no global repository. [`CatalogSystem`](runtime::CatalogSystem) builds
//! the repositories from a [`CatalogConfig`](runtime::CatalogConfig) and the caller
//! passes them where they are needed.
//!
//! ### 3. Concurrency Model
//! Repositories are cheap to clone and hold no mutable state. Calls from
//! different tasks run independently; there is no ordering between overlapping
//! calls, so two racing updates of one product end with whichever response lands last.
//!
//! ### 4. Observability
//! We use `tracing` with structured fields. Every repository call opens a span;
//! requests and rejected responses are logged at `debug`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: HTTP round trips, URL building, response classification.
//! - **Key items**: [`ResourceClient`](framework::ResourceClient), [`RestEntity`](framework::RestEntity).
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: Resource-specific repositories with typed errors.
//! - **Key items**: [`ProductRepository`](clients::ProductRepository), [`CategoryRepository`](clients::CategoryRepository).
//!
//! ### 3. The Resources ([`product`], [`category`], [`model`])
//! - **Role**: Wire types, list filters and per-resource errors.
//!
//! ### 4. The Wiring ([`runtime`])
//! - **Role**: Configuration, repository construction and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List the products of category 1 against the public API
//! RUST_LOG=debug cargo run -- list --category-id 1
//!
//! # Point at another deployment
//! CATALOG_API_URL=http://localhost:3000/api/v1 cargo run -- get 7
//! ```

pub mod category;
pub mod clients;
pub mod framework;
pub mod model;
pub mod product;
pub mod runtime;
