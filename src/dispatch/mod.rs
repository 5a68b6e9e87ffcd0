//----------------------------------------
// unified dispatch mod
//----------------------------------------
pub mod types;
pub mod unified;
