pub mod aggregate;
pub mod cod;
pub mod dispute;
pub mod notify;
pub mod pay;
pub mod settlement;
