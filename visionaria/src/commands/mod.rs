pub mod lead;
pub mod link;
pub mod serve;
