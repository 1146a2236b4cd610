pub mod generate;
pub mod server;
