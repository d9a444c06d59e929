#[path = "builder/grounded_builder.rs"]
mod grounded_builder;

#[path = "builder/state.rs"]
mod state;

#[path = "builder/azure.rs"]
mod azure;

#[path = "builder/search.rs"]
mod search;

#[path = "builder/build.rs"]
mod build;

pub use grounded_builder::GroundedChatBuilder;
