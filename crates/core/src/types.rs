/// All database primary keys are PostgreSQL SERIAL.
pub type DbId = i32;
