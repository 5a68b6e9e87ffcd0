//----------------------------------------
// two-stage discovery/validation mod
//----------------------------------------
pub mod evaluate;
pub mod optimize;
pub mod types;
