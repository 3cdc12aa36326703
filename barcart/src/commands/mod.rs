pub mod contact;
pub mod migrate;
pub mod serve;
