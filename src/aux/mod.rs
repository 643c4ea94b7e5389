pub mod he;
