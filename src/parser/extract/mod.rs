pub mod centres;
pub mod regions;
