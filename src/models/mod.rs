pub mod contract;
pub mod delivery;
pub mod dispute;
pub mod settlement;
pub mod trip;
