/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("floor {floor} is outside the served range 1..={n_floors}")]
    FloorOutOfRange { floor: u8, n_floors: u8 },

    #[error("calls must be placed up or down, got {0}")]
    InvalidCallDirection(crate::shared::Direction),

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
}
