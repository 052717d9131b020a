pub mod howto;
pub mod research;
