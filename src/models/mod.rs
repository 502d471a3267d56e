pub mod caregiver;
pub mod session_row;
