//! # Observability & Tracing
//!
//! Structured logging for mapping derivation and registry bootstrap.
//!
//! ## What Gets Traced
//!
//! - **Registry**: one `info!` summary when bootstrap finishes
//! - **Registration**: a `register` span per type with `debug!` results
//! - **Derivation**: path, export flag and rels of every mapping at `debug`
//! - **Config**: unknown fields at `warn`, loaded files at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Summary only
//! RUST_LOG=info cargo run
//!
//! # Every derived mapping
//! RUST_LOG=debug cargo run
//!
//! # Registry lookups from annotation tables too
//! RUST_LOG=resource_mapping=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` a registration looks like:
//!
//! ```text
//! DEBUG register: Derived resource mapping type_name="Order" annotated=true path=/order exported=true rel=purchases single_rel=order
//! DEBUG register: Registered path=/order exported=true
//! ```

/// Initializes the tracing subscriber, filtered through `RUST_LOG`.
///
/// Logs go to stderr so that stdout stays free for reports.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Type names are carried as fields
        .compact()
        .init();
}
