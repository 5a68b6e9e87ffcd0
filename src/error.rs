//----------------------------------------
// Crate error type
//----------------------------------------
use crate::normal::error::NormalDistErr;
use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwasErr {
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while searching for sample size: {0}")]
    RootFind(RootFindErr),
}
