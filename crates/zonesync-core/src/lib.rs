// # zonesync-core
//
// Core library for provider-backed DNS zone synchronization.
//
// ## Architecture Overview
//
// This library provides the provider-agnostic half of zone sync:
// - **Record / Zone**: Canonical record model and zones keyed by (name, type)
// - **Plan / Change**: Ordered create/update/delete changes from a planner
// - **ZoneProvider**: Trait for reading and reconciling a zone on a provider
// - **Planner**: Trait for the external diff algorithm
// - **SyncEngine**: Orchestrates populate → plan → apply
// - **ProviderRegistry**: Plugin-based registry for zone providers
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from provider implementations
// 2. **Closed Dispatch**: Record types and change kinds are enums, matched exhaustively
// 3. **Plugin-Based**: Providers are registered dynamically, no hard-coded if-else
// 4. **Library-First**: All functionality can be used as a library
// 5. **Sequential Apply**: Changes are applied one at a time, in plan order

pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod record;
pub mod registry;
pub mod traits;
pub mod zone;

// Re-export core types for convenience
pub use config::{EngineConfig, ProviderConfig, SyncConfig};
pub use engine::{EngineEvent, SyncEngine, SyncReport};
pub use error::{Error, Result};
pub use plan::{ApplyStage, Change, ChangeKind, Plan};
pub use record::{MxValue, NaptrValue, Record, RecordData, RecordType, SrvValue, SshfpValue};
pub use registry::ProviderRegistry;
pub use traits::{Planner, ZoneProvider, ZoneProviderFactory};
pub use zone::Zone;
