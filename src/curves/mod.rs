//----------------------------------------
// curves and tables mod
//----------------------------------------
pub mod power_curve;
pub mod table;
pub mod types;
