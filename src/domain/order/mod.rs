// ============================================================================
// Order Domain - Purchase Orders and Their Line Items
// ============================================================================
//
// This module contains the Order aggregate types:
// - Value objects (NewOrder, NewLineItem, Order, OrderLineItem)
// - Errors (OrderError enum)
//
// Persistence lives in src/store/.
//
// ============================================================================

pub mod value_objects;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
