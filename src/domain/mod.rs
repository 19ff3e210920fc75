// ============================================================================
// Domain Layer
// ============================================================================
//
// The Order aggregate: an order plus its owned line items, treated as one
// consistency unit by every store implementation.
//
// ============================================================================

pub mod order;
