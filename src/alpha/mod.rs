//----------------------------------------
// multiple testing mod
//----------------------------------------
pub mod effective_alpha;
pub mod types;
