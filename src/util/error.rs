//----------------------------------------
// root finding errors
//----------------------------------------
use crate::error::PwasErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("lower bound ({lower}) is not below upper bound ({upper})")]
    BadBracket { lower: f64, upper: f64 },
    #[error("target {target} not reached at upper bound {upper} (f = {f_upper})")]
    TargetUnreachable { target: f64, upper: f64, f_upper: f64 },
}

impl From<RootFindErr> for PwasErr {
    fn from(err: RootFindErr) -> Self {
        PwasErr::RootFind(err)
    }
}
