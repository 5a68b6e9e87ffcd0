//----------------------------------------
// regression models mod
//----------------------------------------
pub mod cox;
pub mod gee;
pub mod linear;
pub mod logistic;
pub mod poisson;
pub mod types;
pub mod wald;
